//! Web context functions
//!
//! WebKitWebContext manages resources shared by web views: caches, cookie
//! storage, favicons, security policy and the web process model. The cookie,
//! favicon and security managers are owned by their context.

use super::wk_types::*;

extern "C" {
    // ========== Types ==========

    pub fn webkit_web_context_get_type() -> GType;
    pub fn webkit_cookie_manager_get_type() -> GType;
    pub fn webkit_favicon_database_get_type() -> GType;
    pub fn webkit_security_manager_get_type() -> GType;
    pub fn webkit_cache_model_get_type() -> GType;
    pub fn webkit_process_model_get_type() -> GType;
    pub fn webkit_tls_errors_policy_get_type() -> GType;

    // ========== WebKitWebContext ==========

    /// Get the default context (transfer none)
    pub fn webkit_web_context_get_default() -> *mut WebKitWebContext;

    pub fn webkit_web_context_get_cache_model(context: *mut WebKitWebContext) -> WebKitCacheModel;

    pub fn webkit_web_context_set_cache_model(
        context: *mut WebKitWebContext,
        cache_model: WebKitCacheModel,
    );

    pub fn webkit_web_context_clear_cache(context: *mut WebKitWebContext);

    /// Start a download (transfer full)
    pub fn webkit_web_context_download_uri(
        context: *mut WebKitWebContext,
        uri: *const gchar,
    ) -> *mut WebKitDownload;

    /// Get the cookie manager (transfer none)
    pub fn webkit_web_context_get_cookie_manager(
        context: *mut WebKitWebContext,
    ) -> *mut WebKitCookieManager;

    /// Get the favicon database (transfer none)
    pub fn webkit_web_context_get_favicon_database(
        context: *mut WebKitWebContext,
    ) -> *mut WebKitFaviconDatabase;

    pub fn webkit_web_context_set_favicon_database_directory(
        context: *mut WebKitWebContext,
        path: *const gchar,
    );

    pub fn webkit_web_context_get_favicon_database_directory(
        context: *mut WebKitWebContext,
    ) -> *const gchar;

    /// Get the security manager (transfer none)
    pub fn webkit_web_context_get_security_manager(
        context: *mut WebKitWebContext,
    ) -> *mut WebKitSecurityManager;

    pub fn webkit_web_context_set_additional_plugins_directory(
        context: *mut WebKitWebContext,
        directory: *const gchar,
    );

    pub fn webkit_web_context_get_spell_checking_enabled(
        context: *mut WebKitWebContext,
    ) -> gboolean;

    pub fn webkit_web_context_set_spell_checking_enabled(
        context: *mut WebKitWebContext,
        enabled: gboolean,
    );

    /// Get the spell checking languages (NULL-terminated, transfer none)
    pub fn webkit_web_context_get_spell_checking_languages(
        context: *mut WebKitWebContext,
    ) -> *const *const gchar;

    pub fn webkit_web_context_set_spell_checking_languages(
        context: *mut WebKitWebContext,
        languages: *const *const gchar,
    );

    pub fn webkit_web_context_set_preferred_languages(
        context: *mut WebKitWebContext,
        languages: *const *const gchar,
    );

    pub fn webkit_web_context_set_tls_errors_policy(
        context: *mut WebKitWebContext,
        policy: WebKitTLSErrorsPolicy,
    );

    pub fn webkit_web_context_get_tls_errors_policy(
        context: *mut WebKitWebContext,
    ) -> WebKitTLSErrorsPolicy;

    pub fn webkit_web_context_set_web_extensions_directory(
        context: *mut WebKitWebContext,
        directory: *const gchar,
    );

    pub fn webkit_web_context_prefetch_dns(context: *mut WebKitWebContext, hostname: *const gchar);

    pub fn webkit_web_context_set_disk_cache_directory(
        context: *mut WebKitWebContext,
        directory: *const gchar,
    );

    pub fn webkit_web_context_allow_tls_certificate_for_host(
        context: *mut WebKitWebContext,
        info: *mut WebKitCertificateInfo,
        host: *const gchar,
    );

    pub fn webkit_web_context_get_process_model(
        context: *mut WebKitWebContext,
    ) -> WebKitProcessModel;

    pub fn webkit_web_context_set_process_model(
        context: *mut WebKitWebContext,
        process_model: WebKitProcessModel,
    );

    // ========== WebKitCookieManager ==========

    pub fn webkit_cookie_manager_delete_all_cookies(manager: *mut WebKitCookieManager);

    pub fn webkit_cookie_manager_delete_cookies_for_domain(
        manager: *mut WebKitCookieManager,
        domain: *const gchar,
    );

    // ========== WebKitFaviconDatabase ==========

    /// Get the favicon URI stored for a page (transfer full, free with g_free)
    pub fn webkit_favicon_database_get_favicon_uri(
        database: *mut WebKitFaviconDatabase,
        page_uri: *const gchar,
    ) -> *mut gchar;

    pub fn webkit_favicon_database_clear(database: *mut WebKitFaviconDatabase);

    // ========== WebKitSecurityManager ==========

    pub fn webkit_security_manager_register_uri_scheme_as_local(
        manager: *mut WebKitSecurityManager,
        scheme: *const gchar,
    );

    pub fn webkit_security_manager_uri_scheme_is_local(
        manager: *mut WebKitSecurityManager,
        scheme: *const gchar,
    ) -> gboolean;

    pub fn webkit_security_manager_register_uri_scheme_as_secure(
        manager: *mut WebKitSecurityManager,
        scheme: *const gchar,
    );

    pub fn webkit_security_manager_uri_scheme_is_secure(
        manager: *mut WebKitSecurityManager,
        scheme: *const gchar,
    ) -> gboolean;

    pub fn webkit_security_manager_register_uri_scheme_as_cors_enabled(
        manager: *mut WebKitSecurityManager,
        scheme: *const gchar,
    );

    pub fn webkit_security_manager_uri_scheme_is_cors_enabled(
        manager: *mut WebKitSecurityManager,
        scheme: *const gchar,
    ) -> gboolean;
}
