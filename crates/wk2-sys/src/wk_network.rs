//! URI request, download and certificate functions

use super::wk_types::*;

extern "C" {
    pub fn webkit_uri_request_get_type() -> GType;
    pub fn webkit_download_get_type() -> GType;
    pub fn webkit_certificate_info_get_type() -> GType;

    // ========== WebKitURIRequest ==========

    /// Create a request (transfer full)
    pub fn webkit_uri_request_new(uri: *const gchar) -> *mut WebKitURIRequest;

    pub fn webkit_uri_request_get_uri(request: *mut WebKitURIRequest) -> *const gchar;

    pub fn webkit_uri_request_set_uri(request: *mut WebKitURIRequest, uri: *const gchar);

    // ========== WebKitDownload ==========

    /// Get the request that started the download (transfer none)
    pub fn webkit_download_get_request(download: *mut WebKitDownload) -> *mut WebKitURIRequest;

    pub fn webkit_download_get_destination(download: *mut WebKitDownload) -> *const gchar;

    pub fn webkit_download_set_destination(download: *mut WebKitDownload, uri: *const gchar);

    pub fn webkit_download_cancel(download: *mut WebKitDownload);

    pub fn webkit_download_get_estimated_progress(download: *mut WebKitDownload) -> gdouble;

    pub fn webkit_download_get_elapsed_time(download: *mut WebKitDownload) -> gdouble;

    pub fn webkit_download_get_received_data_length(download: *mut WebKitDownload) -> guint64;

    /// Get the web view that initiated the download (transfer none, may be NULL)
    pub fn webkit_download_get_web_view(download: *mut WebKitDownload) -> *mut WebKitWebView;

    // ========== WebKitCertificateInfo ==========

    /// Copy a certificate info (transfer full)
    pub fn webkit_certificate_info_copy(
        info: *mut WebKitCertificateInfo,
    ) -> *mut WebKitCertificateInfo;

    pub fn webkit_certificate_info_free(info: *mut WebKitCertificateInfo);

    pub fn webkit_certificate_info_get_tls_errors(
        info: *mut WebKitCertificateInfo,
    ) -> GTlsCertificateFlags;
}
