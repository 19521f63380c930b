//! Web view functions
//!
//! WebKitWebView is a GtkWidget, so the constructors return a floating
//! reference that the caller sinks.

use super::wk_types::*;

extern "C" {
    pub fn webkit_web_view_get_type() -> GType;
    pub fn webkit_web_view_group_get_type() -> GType;
    pub fn webkit_load_event_get_type() -> GType;

    // ========== View Creation ==========

    /// Create a view in the default context (floating)
    pub fn webkit_web_view_new() -> *mut GtkWidget;

    /// Create a view in the given context (floating)
    pub fn webkit_web_view_new_with_context(context: *mut WebKitWebContext) -> *mut GtkWidget;

    /// Create a view in the given group (floating)
    pub fn webkit_web_view_new_with_group(group: *mut WebKitWebViewGroup) -> *mut GtkWidget;

    // ========== Related Objects ==========

    /// Get the context of the view (transfer none)
    pub fn webkit_web_view_get_context(view: *mut WebKitWebView) -> *mut WebKitWebContext;

    /// Get the group of the view (transfer none)
    pub fn webkit_web_view_get_group(view: *mut WebKitWebView) -> *mut WebKitWebViewGroup;

    /// Get the back/forward list of the view (transfer none)
    pub fn webkit_web_view_get_back_forward_list(
        view: *mut WebKitWebView,
    ) -> *mut WebKitBackForwardList;

    // ========== Loading ==========

    pub fn webkit_web_view_load_uri(view: *mut WebKitWebView, uri: *const gchar);

    pub fn webkit_web_view_load_html(
        view: *mut WebKitWebView,
        content: *const gchar,
        base_uri: *const gchar,
    );

    pub fn webkit_web_view_load_alternate_html(
        view: *mut WebKitWebView,
        content: *const gchar,
        content_uri: *const gchar,
        base_uri: *const gchar,
    );

    pub fn webkit_web_view_load_plain_text(view: *mut WebKitWebView, plain_text: *const gchar);

    pub fn webkit_web_view_load_request(view: *mut WebKitWebView, request: *mut WebKitURIRequest);

    pub fn webkit_web_view_reload(view: *mut WebKitWebView);

    pub fn webkit_web_view_reload_bypass_cache(view: *mut WebKitWebView);

    pub fn webkit_web_view_stop_loading(view: *mut WebKitWebView);

    pub fn webkit_web_view_is_loading(view: *mut WebKitWebView) -> gboolean;

    pub fn webkit_web_view_get_estimated_load_progress(view: *mut WebKitWebView) -> gdouble;

    // ========== Navigation ==========

    pub fn webkit_web_view_can_go_back(view: *mut WebKitWebView) -> gboolean;

    pub fn webkit_web_view_can_go_forward(view: *mut WebKitWebView) -> gboolean;

    pub fn webkit_web_view_go_back(view: *mut WebKitWebView);

    pub fn webkit_web_view_go_forward(view: *mut WebKitWebView);

    pub fn webkit_web_view_go_to_back_forward_list_item(
        view: *mut WebKitWebView,
        item: *mut WebKitBackForwardListItem,
    );

    // ========== Page Info ==========

    pub fn webkit_web_view_get_title(view: *mut WebKitWebView) -> *const gchar;

    pub fn webkit_web_view_get_uri(view: *mut WebKitWebView) -> *const gchar;

    pub fn webkit_web_view_get_page_id(view: *mut WebKitWebView) -> guint64;

    pub fn webkit_web_view_get_custom_charset(view: *mut WebKitWebView) -> *const gchar;

    pub fn webkit_web_view_set_custom_charset(view: *mut WebKitWebView, charset: *const gchar);

    // ========== WebKitWebViewGroup ==========

    /// Create a group (transfer full)
    pub fn webkit_web_view_group_new(name: *const gchar) -> *mut WebKitWebViewGroup;

    pub fn webkit_web_view_group_get_name(group: *mut WebKitWebViewGroup) -> *const gchar;
}
