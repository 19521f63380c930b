//! Web context and the managers it owns
//!
//! The WebContext manages resources shared by web views: caches, cookie
//! storage, favicons and security policy. Manager accessors return objects
//! owned by the context; the wrappers take their own strong reference so they
//! stay valid on their own.

use crate::certificate::CertificateInfo;
use crate::conv::{
    from_gboolean, from_glib_str, from_glib_strv, take_glib_str, to_cstring, to_gboolean,
    StrArray,
};
use crate::download::Download;
use crate::enums::{CacheModel, GlibEnum, ProcessModel, TlsErrorsPolicy};
use crate::error::{BridgeError, Result};
use crate::ffi::{
    self, WebKitCookieManager, WebKitFaviconDatabase, WebKitSecurityManager, WebKitWebContext,
};
use crate::object::{object_wrapper, sink_nullable, take_nullable};

object_wrapper! {
    /// A WebKit browsing context
    ///
    /// Like every wrapper in this crate it must only be used on the thread
    /// running the GTK main loop; it is neither `Send` nor `Sync`.
    WebContext => WebKitWebContext, WebContext
}

object_wrapper! {
    /// Cookie storage of a web context
    CookieManager => WebKitCookieManager, CookieManager
}

object_wrapper! {
    /// Favicon storage of a web context
    FaviconDatabase => WebKitFaviconDatabase, FaviconDatabase
}

object_wrapper! {
    /// URI scheme security policy of a web context
    SecurityManager => WebKitSecurityManager, SecurityManager
}

impl WebContext {
    /// The default context shared by views created without one
    pub fn default_context() -> Result<Self> {
        unsafe { sink_nullable(ffi::webkit_web_context_get_default()) }
            .ok_or(BridgeError::NullHandle("webkit_web_context_get_default"))
    }

    /// Get the cache model
    pub fn cache_model(&self) -> Result<CacheModel> {
        CacheModel::from_glib(unsafe { ffi::webkit_web_context_get_cache_model(self.as_ptr()) })
    }

    /// Set the cache model
    pub fn set_cache_model(&self, model: CacheModel) {
        unsafe { ffi::webkit_web_context_set_cache_model(self.as_ptr(), model.into_glib()) }
    }

    /// Clear all resource caches
    pub fn clear_cache(&self) {
        unsafe { ffi::webkit_web_context_clear_cache(self.as_ptr()) }
    }

    /// Start downloading `uri`
    pub fn download_uri(&self, uri: &str) -> Result<Download> {
        let uri = to_cstring(uri)?;
        unsafe { take_nullable(ffi::webkit_web_context_download_uri(self.as_ptr(), uri.as_ptr())) }
            .ok_or(BridgeError::NullHandle("webkit_web_context_download_uri"))
    }

    /// Cookie manager of the context
    pub fn cookie_manager(&self) -> Option<CookieManager> {
        unsafe { sink_nullable(ffi::webkit_web_context_get_cookie_manager(self.as_ptr())) }
    }

    /// Favicon database of the context
    pub fn favicon_database(&self) -> Option<FaviconDatabase> {
        unsafe { sink_nullable(ffi::webkit_web_context_get_favicon_database(self.as_ptr())) }
    }

    /// Set where favicons are stored
    pub fn set_favicon_database_directory(&self, path: &str) -> Result<()> {
        let path = to_cstring(path)?;
        unsafe {
            ffi::webkit_web_context_set_favicon_database_directory(self.as_ptr(), path.as_ptr())
        }
        Ok(())
    }

    /// Directory of the favicon database, `None` until one is set
    pub fn favicon_database_directory(&self) -> Option<String> {
        unsafe {
            from_glib_str(ffi::webkit_web_context_get_favicon_database_directory(self.as_ptr()))
        }
    }

    /// Security manager of the context
    pub fn security_manager(&self) -> Option<SecurityManager> {
        unsafe { sink_nullable(ffi::webkit_web_context_get_security_manager(self.as_ptr())) }
    }

    /// Add a directory to search for plugins
    pub fn set_additional_plugins_directory(&self, directory: &str) -> Result<()> {
        let directory = to_cstring(directory)?;
        unsafe {
            ffi::webkit_web_context_set_additional_plugins_directory(
                self.as_ptr(),
                directory.as_ptr(),
            )
        }
        Ok(())
    }

    /// Check if spell checking is on
    pub fn spell_checking_enabled(&self) -> bool {
        from_gboolean(unsafe { ffi::webkit_web_context_get_spell_checking_enabled(self.as_ptr()) })
    }

    /// Turn spell checking on or off
    pub fn set_spell_checking_enabled(&self, enabled: bool) {
        unsafe {
            ffi::webkit_web_context_set_spell_checking_enabled(self.as_ptr(), to_gboolean(enabled))
        }
    }

    /// Languages used for spell checking
    pub fn spell_checking_languages(&self) -> Vec<String> {
        unsafe { from_glib_strv(ffi::webkit_web_context_get_spell_checking_languages(self.as_ptr())) }
    }

    /// Set the languages used for spell checking
    pub fn set_spell_checking_languages<S: AsRef<str>>(&self, languages: &[S]) -> Result<()> {
        let languages = StrArray::new(languages)?;
        unsafe {
            ffi::webkit_web_context_set_spell_checking_languages(self.as_ptr(), languages.as_ptr())
        }
        Ok(())
    }

    /// Set the languages sent in Accept-Language
    pub fn set_preferred_languages<S: AsRef<str>>(&self, languages: &[S]) -> Result<()> {
        let languages = StrArray::new(languages)?;
        unsafe {
            ffi::webkit_web_context_set_preferred_languages(self.as_ptr(), languages.as_ptr())
        }
        Ok(())
    }

    /// Set how TLS errors are handled
    pub fn set_tls_errors_policy(&self, policy: TlsErrorsPolicy) {
        unsafe { ffi::webkit_web_context_set_tls_errors_policy(self.as_ptr(), policy.into_glib()) }
    }

    /// Get how TLS errors are handled
    pub fn tls_errors_policy(&self) -> Result<TlsErrorsPolicy> {
        TlsErrorsPolicy::from_glib(unsafe {
            ffi::webkit_web_context_get_tls_errors_policy(self.as_ptr())
        })
    }

    /// Set the directory web extensions load from
    pub fn set_web_extensions_directory(&self, directory: &str) -> Result<()> {
        let directory = to_cstring(directory)?;
        unsafe {
            ffi::webkit_web_context_set_web_extensions_directory(self.as_ptr(), directory.as_ptr())
        }
        Ok(())
    }

    /// Resolve `hostname` ahead of use
    pub fn prefetch_dns(&self, hostname: &str) -> Result<()> {
        let hostname = to_cstring(hostname)?;
        unsafe { ffi::webkit_web_context_prefetch_dns(self.as_ptr(), hostname.as_ptr()) }
        Ok(())
    }

    /// Set the disk cache directory
    pub fn set_disk_cache_directory(&self, directory: &str) -> Result<()> {
        let directory = to_cstring(directory)?;
        unsafe {
            ffi::webkit_web_context_set_disk_cache_directory(self.as_ptr(), directory.as_ptr())
        }
        Ok(())
    }

    /// Accept `info` for `host` despite its TLS errors
    pub fn allow_tls_certificate_for_host(&self, info: &CertificateInfo, host: &str) -> Result<()> {
        let host = to_cstring(host)?;
        unsafe {
            ffi::webkit_web_context_allow_tls_certificate_for_host(
                self.as_ptr(),
                info.as_ptr(),
                host.as_ptr(),
            )
        }
        Ok(())
    }

    /// Get the process model
    pub fn process_model(&self) -> Result<ProcessModel> {
        ProcessModel::from_glib(unsafe { ffi::webkit_web_context_get_process_model(self.as_ptr()) })
    }

    /// Set the process model
    pub fn set_process_model(&self, model: ProcessModel) {
        unsafe { ffi::webkit_web_context_set_process_model(self.as_ptr(), model.into_glib()) }
    }
}

impl CookieManager {
    /// Delete every stored cookie
    pub fn delete_all_cookies(&self) {
        unsafe { ffi::webkit_cookie_manager_delete_all_cookies(self.as_ptr()) }
    }

    /// Delete the cookies of `domain`
    pub fn delete_cookies_for_domain(&self, domain: &str) -> Result<()> {
        let domain = to_cstring(domain)?;
        unsafe { ffi::webkit_cookie_manager_delete_cookies_for_domain(self.as_ptr(), domain.as_ptr()) }
        Ok(())
    }
}

impl FaviconDatabase {
    /// URI of the favicon stored for `page_uri`, if any
    pub fn favicon_uri(&self, page_uri: &str) -> Result<Option<String>> {
        let page_uri = to_cstring(page_uri)?;
        Ok(unsafe {
            take_glib_str(ffi::webkit_favicon_database_get_favicon_uri(
                self.as_ptr(),
                page_uri.as_ptr(),
            ))
        })
    }

    /// Remove every stored favicon
    pub fn clear(&self) {
        unsafe { ffi::webkit_favicon_database_clear(self.as_ptr()) }
    }
}

macro_rules! scheme_policy {
    ($(#[$meta:meta])* $register:ident, $query:ident => $ffi_register:ident, $ffi_query:ident) => {
        $(#[$meta])*
        pub fn $register(&self, scheme: &str) -> Result<()> {
            let scheme = to_cstring(scheme)?;
            unsafe { ffi::$ffi_register(self.as_ptr(), scheme.as_ptr()) }
            Ok(())
        }

        /// Check if `scheme` was registered with this policy
        pub fn $query(&self, scheme: &str) -> Result<bool> {
            let scheme = to_cstring(scheme)?;
            Ok(from_gboolean(unsafe { ffi::$ffi_query(self.as_ptr(), scheme.as_ptr()) }))
        }
    };
}

impl SecurityManager {
    scheme_policy! {
        /// Treat `scheme` like `file://`
        register_uri_scheme_as_local, uri_scheme_is_local =>
        webkit_security_manager_register_uri_scheme_as_local,
        webkit_security_manager_uri_scheme_is_local
    }

    scheme_policy! {
        /// Exempt `scheme` from mixed content checks
        register_uri_scheme_as_secure, uri_scheme_is_secure =>
        webkit_security_manager_register_uri_scheme_as_secure,
        webkit_security_manager_uri_scheme_is_secure
    }

    scheme_policy! {
        /// Allow cross-origin requests for `scheme`
        register_uri_scheme_as_cors_enabled, uri_scheme_is_cors_enabled =>
        webkit_security_manager_register_uri_scheme_as_cors_enabled,
        webkit_security_manager_uri_scheme_is_cors_enabled
    }
}
