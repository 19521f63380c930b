//! Web views and view groups

use crate::context::WebContext;
use crate::conv::{from_gboolean, from_glib_str, opt_ptr, to_cstring, to_cstring_opt};
use crate::download::UriRequest;
use crate::error::{BridgeError, Result};
use crate::ffi::{self, WebKitWebView, WebKitWebViewGroup};
use crate::history::{BackForwardList, BackForwardListItem};
use crate::object::{object_wrapper, sink_nullable, take_nullable};

object_wrapper! {
    /// A widget displaying web content
    ///
    /// Views are created with a floating reference, which the constructors
    /// sink so the wrapper owns the view. Hand the view to a container with
    /// [`WebView::as_ptr`] and keep the wrapper alive as long as you use it.
    WebView => WebKitWebView, WebView
}

object_wrapper! {
    /// Views sharing settings and user content
    WebViewGroup => WebKitWebViewGroup, WebViewGroup
}

impl WebView {
    /// Create a view in the default context
    pub fn new() -> Result<Self> {
        unsafe { sink_nullable(ffi::webkit_web_view_new()) }
            .ok_or(BridgeError::NullHandle("webkit_web_view_new"))
    }

    /// Create a view in `context`
    pub fn with_context(context: &WebContext) -> Result<Self> {
        unsafe { sink_nullable(ffi::webkit_web_view_new_with_context(context.as_ptr())) }
            .ok_or(BridgeError::NullHandle("webkit_web_view_new_with_context"))
    }

    /// Create a view in `group`
    pub fn with_group(group: &WebViewGroup) -> Result<Self> {
        unsafe { sink_nullable(ffi::webkit_web_view_new_with_group(group.as_ptr())) }
            .ok_or(BridgeError::NullHandle("webkit_web_view_new_with_group"))
    }

    /// Context the view belongs to
    pub fn context(&self) -> Option<WebContext> {
        unsafe { sink_nullable(ffi::webkit_web_view_get_context(self.as_ptr())) }
    }

    /// Group the view belongs to
    pub fn group(&self) -> Option<WebViewGroup> {
        unsafe { sink_nullable(ffi::webkit_web_view_get_group(self.as_ptr())) }
    }

    /// Navigation history of the view
    pub fn back_forward_list(&self) -> Option<BackForwardList> {
        unsafe { sink_nullable(ffi::webkit_web_view_get_back_forward_list(self.as_ptr())) }
    }

    // ========== Loading ==========

    /// Navigate to `uri`
    pub fn load_uri(&self, uri: &str) -> Result<()> {
        let uri = to_cstring(uri)?;
        unsafe { ffi::webkit_web_view_load_uri(self.as_ptr(), uri.as_ptr()) }
        Ok(())
    }

    /// Load `content` as HTML; relative URLs resolve against `base_uri`
    pub fn load_html(&self, content: &str, base_uri: Option<&str>) -> Result<()> {
        let content = to_cstring(content)?;
        let base_uri = to_cstring_opt(base_uri)?;
        unsafe { ffi::webkit_web_view_load_html(self.as_ptr(), content.as_ptr(), opt_ptr(&base_uri)) }
        Ok(())
    }

    /// Load `content` in place of `content_uri`, typically an error page
    pub fn load_alternate_html(
        &self,
        content: &str,
        content_uri: &str,
        base_uri: Option<&str>,
    ) -> Result<()> {
        let content = to_cstring(content)?;
        let content_uri = to_cstring(content_uri)?;
        let base_uri = to_cstring_opt(base_uri)?;
        unsafe {
            ffi::webkit_web_view_load_alternate_html(
                self.as_ptr(),
                content.as_ptr(),
                content_uri.as_ptr(),
                opt_ptr(&base_uri),
            )
        }
        Ok(())
    }

    /// Load `text` as a plain text document
    pub fn load_plain_text(&self, text: &str) -> Result<()> {
        let text = to_cstring(text)?;
        unsafe { ffi::webkit_web_view_load_plain_text(self.as_ptr(), text.as_ptr()) }
        Ok(())
    }

    /// Load a prepared request
    pub fn load_request(&self, request: &UriRequest) {
        unsafe { ffi::webkit_web_view_load_request(self.as_ptr(), request.as_ptr()) }
    }

    /// Reload the page
    pub fn reload(&self) {
        unsafe { ffi::webkit_web_view_reload(self.as_ptr()) }
    }

    /// Reload the page, skipping the cache
    pub fn reload_bypass_cache(&self) {
        unsafe { ffi::webkit_web_view_reload_bypass_cache(self.as_ptr()) }
    }

    /// Stop the current load
    pub fn stop_loading(&self) {
        unsafe { ffi::webkit_web_view_stop_loading(self.as_ptr()) }
    }

    /// Check if a load is in progress
    pub fn is_loading(&self) -> bool {
        from_gboolean(unsafe { ffi::webkit_web_view_is_loading(self.as_ptr()) })
    }

    /// Progress of the current load between 0.0 and 1.0
    pub fn estimated_load_progress(&self) -> f64 {
        unsafe { ffi::webkit_web_view_get_estimated_load_progress(self.as_ptr()) }
    }

    // ========== Navigation ==========

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        from_gboolean(unsafe { ffi::webkit_web_view_can_go_back(self.as_ptr()) })
    }

    /// Check if we can go forward
    pub fn can_go_forward(&self) -> bool {
        from_gboolean(unsafe { ffi::webkit_web_view_can_go_forward(self.as_ptr()) })
    }

    /// Go back in history
    pub fn go_back(&self) {
        unsafe { ffi::webkit_web_view_go_back(self.as_ptr()) }
    }

    /// Go forward in history
    pub fn go_forward(&self) {
        unsafe { ffi::webkit_web_view_go_forward(self.as_ptr()) }
    }

    /// Jump to a history item
    pub fn go_to_back_forward_list_item(&self, item: &BackForwardListItem) {
        unsafe { ffi::webkit_web_view_go_to_back_forward_list_item(self.as_ptr(), item.as_ptr()) }
    }

    // ========== Page Info ==========

    /// Title of the current page
    pub fn title(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_web_view_get_title(self.as_ptr())) }
    }

    /// Active URI, `None` before anything was loaded
    pub fn uri(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_web_view_get_uri(self.as_ptr())) }
    }

    /// Identifier of the page shown by the view
    pub fn page_id(&self) -> u64 {
        unsafe { ffi::webkit_web_view_get_page_id(self.as_ptr()) }
    }

    /// Encoding override, if one is set
    pub fn custom_charset(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_web_view_get_custom_charset(self.as_ptr())) }
    }

    /// Override the page encoding; `None` restores the default
    pub fn set_custom_charset(&self, charset: Option<&str>) -> Result<()> {
        let charset = to_cstring_opt(charset)?;
        unsafe { ffi::webkit_web_view_set_custom_charset(self.as_ptr(), opt_ptr(&charset)) }
        Ok(())
    }
}

impl WebViewGroup {
    /// Create a named group
    pub fn new(name: &str) -> Result<Self> {
        let name = to_cstring(name)?;
        unsafe { take_nullable(ffi::webkit_web_view_group_new(name.as_ptr())) }
            .ok_or(BridgeError::NullHandle("webkit_web_view_group_new"))
    }

    /// Name of the group
    pub fn name(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_web_view_group_get_name(self.as_ptr())) }
    }
}
