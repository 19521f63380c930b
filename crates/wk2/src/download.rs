//! URI requests and downloads

use crate::conv::{from_glib_str, from_glib_str_or_empty, to_cstring};
use crate::error::{BridgeError, Result};
use crate::ffi::{self, WebKitDownload, WebKitURIRequest};
use crate::object::{object_wrapper, sink_nullable, take_nullable};
use crate::view::WebView;

object_wrapper! {
    /// A request for a URI
    UriRequest => WebKitURIRequest, UriRequest
}

object_wrapper! {
    /// A download started by a web context or a web view
    ///
    /// The transfer runs asynchronously; poll its progress through this
    /// wrapper.
    Download => WebKitDownload, Download
}

impl UriRequest {
    /// Build a request for `uri`
    pub fn new(uri: &str) -> Result<Self> {
        let uri = to_cstring(uri)?;
        unsafe { take_nullable(ffi::webkit_uri_request_new(uri.as_ptr())) }
            .ok_or(BridgeError::NullHandle("webkit_uri_request_new"))
    }

    /// URI of the request
    pub fn uri(&self) -> String {
        unsafe { from_glib_str_or_empty(ffi::webkit_uri_request_get_uri(self.as_ptr())) }
    }

    /// Point the request at another URI
    pub fn set_uri(&self, uri: &str) -> Result<()> {
        let uri = to_cstring(uri)?;
        unsafe { ffi::webkit_uri_request_set_uri(self.as_ptr(), uri.as_ptr()) }
        Ok(())
    }
}

impl Download {
    /// The request that started the download
    pub fn request(&self) -> Option<UriRequest> {
        unsafe { sink_nullable(ffi::webkit_download_get_request(self.as_ptr())) }
    }

    /// Destination URI, `None` until one has been chosen
    pub fn destination(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_download_get_destination(self.as_ptr())) }
    }

    /// Set where the download is saved
    pub fn set_destination(&self, uri: &str) -> Result<()> {
        let uri = to_cstring(uri)?;
        unsafe { ffi::webkit_download_set_destination(self.as_ptr(), uri.as_ptr()) }
        Ok(())
    }

    /// Cancel the download
    pub fn cancel(&self) {
        unsafe { ffi::webkit_download_cancel(self.as_ptr()) }
    }

    /// Progress between 0.0 and 1.0
    pub fn estimated_progress(&self) -> f64 {
        unsafe { ffi::webkit_download_get_estimated_progress(self.as_ptr()) }
    }

    /// Seconds since the download started
    pub fn elapsed_time(&self) -> f64 {
        unsafe { ffi::webkit_download_get_elapsed_time(self.as_ptr()) }
    }

    /// Bytes received so far
    pub fn received_data_length(&self) -> u64 {
        unsafe { ffi::webkit_download_get_received_data_length(self.as_ptr()) }
    }

    /// The view that started the download, `None` for context downloads
    pub fn web_view(&self) -> Option<WebView> {
        unsafe { sink_nullable(ffi::webkit_download_get_web_view(self.as_ptr())) }
    }
}
