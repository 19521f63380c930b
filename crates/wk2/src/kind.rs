//! The closed set of marshaled kinds
//!
//! [`Kind`] names every WebKit type the bridge can recover from a generic
//! value. Choosing a converter is a `match` on the kind; only the runtime type
//! identifiers are looked up at start-up, because GObject assigns them when
//! the library registers its types.

use std::fmt;
use std::ptr::NonNull;

use crate::certificate::CertificateInfo;
use crate::context::{CookieManager, FaviconDatabase, SecurityManager, WebContext};
use crate::download::{Download, UriRequest};
use crate::enums::{CacheModel, GlibEnum, LoadEvent, ProcessModel, TlsErrorsPolicy};
use crate::error::Result;
use crate::ffi::{self, GObject, GType};
use crate::handle::{BoxedRef, ObjectRef};
use crate::history::{BackForwardList, BackForwardListItem};
use crate::object::ObjectType;
use crate::registry::{Borrowed, Converter, ValueRef};
use crate::view::{WebView, WebViewGroup};

/// Storage category of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Enum,
    Object,
    Boxed,
}

/// A WebKit type known to the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // Enums
    CacheModel,
    LoadEvent,
    ProcessModel,
    TlsErrorsPolicy,

    // Objects
    BackForwardList,
    BackForwardListItem,
    CookieManager,
    Download,
    FaviconDatabase,
    SecurityManager,
    UriRequest,
    WebContext,
    WebView,
    WebViewGroup,

    // Boxed
    CertificateInfo,
}

impl Kind {
    pub const ALL: [Kind; 15] = [
        Kind::CacheModel,
        Kind::LoadEvent,
        Kind::ProcessModel,
        Kind::TlsErrorsPolicy,
        Kind::BackForwardList,
        Kind::BackForwardListItem,
        Kind::CookieManager,
        Kind::Download,
        Kind::FaviconDatabase,
        Kind::SecurityManager,
        Kind::UriRequest,
        Kind::WebContext,
        Kind::WebView,
        Kind::WebViewGroup,
        Kind::CertificateInfo,
    ];

    /// C type name
    pub const fn name(self) -> &'static str {
        match self {
            Kind::CacheModel => "WebKitCacheModel",
            Kind::LoadEvent => "WebKitLoadEvent",
            Kind::ProcessModel => "WebKitProcessModel",
            Kind::TlsErrorsPolicy => "WebKitTLSErrorsPolicy",
            Kind::BackForwardList => "WebKitBackForwardList",
            Kind::BackForwardListItem => "WebKitBackForwardListItem",
            Kind::CookieManager => "WebKitCookieManager",
            Kind::Download => "WebKitDownload",
            Kind::FaviconDatabase => "WebKitFaviconDatabase",
            Kind::SecurityManager => "WebKitSecurityManager",
            Kind::UriRequest => "WebKitURIRequest",
            Kind::WebContext => "WebKitWebContext",
            Kind::WebView => "WebKitWebView",
            Kind::WebViewGroup => "WebKitWebViewGroup",
            Kind::CertificateInfo => "WebKitCertificateInfo",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Kind::CacheModel | Kind::LoadEvent | Kind::ProcessModel | Kind::TlsErrorsPolicy => {
                Category::Enum
            }
            Kind::CertificateInfo => Category::Boxed,
            _ => Category::Object,
        }
    }

    /// Runtime type identifier, registering the type on first use
    pub fn static_type(self) -> GType {
        unsafe {
            match self {
                Kind::CacheModel => ffi::webkit_cache_model_get_type(),
                Kind::LoadEvent => ffi::webkit_load_event_get_type(),
                Kind::ProcessModel => ffi::webkit_process_model_get_type(),
                Kind::TlsErrorsPolicy => ffi::webkit_tls_errors_policy_get_type(),
                Kind::BackForwardList => ffi::webkit_back_forward_list_get_type(),
                Kind::BackForwardListItem => ffi::webkit_back_forward_list_item_get_type(),
                Kind::CookieManager => ffi::webkit_cookie_manager_get_type(),
                Kind::Download => ffi::webkit_download_get_type(),
                Kind::FaviconDatabase => ffi::webkit_favicon_database_get_type(),
                Kind::SecurityManager => ffi::webkit_security_manager_get_type(),
                Kind::UriRequest => ffi::webkit_uri_request_get_type(),
                Kind::WebContext => ffi::webkit_web_context_get_type(),
                Kind::WebView => ffi::webkit_web_view_get_type(),
                Kind::WebViewGroup => ffi::webkit_web_view_group_get_type(),
                Kind::CertificateInfo => ffi::webkit_certificate_info_get_type(),
            }
        }
    }

    /// Converter extracting this kind from a generic value
    pub fn converter(self) -> Converter {
        match self {
            Kind::CacheModel => convert_enum::<CacheModel>,
            Kind::LoadEvent => convert_enum::<LoadEvent>,
            Kind::ProcessModel => convert_enum::<ProcessModel>,
            Kind::TlsErrorsPolicy => convert_enum::<TlsErrorsPolicy>,
            Kind::BackForwardList => convert_object::<BackForwardList>,
            Kind::BackForwardListItem => convert_object::<BackForwardListItem>,
            Kind::CookieManager => convert_object::<CookieManager>,
            Kind::Download => convert_object::<Download>,
            Kind::FaviconDatabase => convert_object::<FaviconDatabase>,
            Kind::SecurityManager => convert_object::<SecurityManager>,
            Kind::UriRequest => convert_object::<UriRequest>,
            Kind::WebContext => convert_object::<WebContext>,
            Kind::WebView => convert_object::<WebView>,
            Kind::WebViewGroup => convert_object::<WebViewGroup>,
            Kind::CertificateInfo => convert_certificate_info,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value recovered from a generic container
#[derive(Debug)]
pub enum Marshaled {
    /// The container holds a NULL object or boxed pointer of this kind
    Null(Kind),
    CacheModel(CacheModel),
    LoadEvent(LoadEvent),
    ProcessModel(ProcessModel),
    TlsErrorsPolicy(TlsErrorsPolicy),
    BackForwardList(BackForwardList),
    BackForwardListItem(BackForwardListItem),
    CookieManager(CookieManager),
    Download(Download),
    FaviconDatabase(FaviconDatabase),
    SecurityManager(SecurityManager),
    UriRequest(UriRequest),
    WebContext(WebContext),
    WebView(WebView),
    WebViewGroup(WebViewGroup),
    CertificateInfo(CertificateInfo),
}

impl Marshaled {
    pub fn kind(&self) -> Kind {
        match self {
            Marshaled::Null(kind) => *kind,
            Marshaled::CacheModel(_) => Kind::CacheModel,
            Marshaled::LoadEvent(_) => Kind::LoadEvent,
            Marshaled::ProcessModel(_) => Kind::ProcessModel,
            Marshaled::TlsErrorsPolicy(_) => Kind::TlsErrorsPolicy,
            Marshaled::BackForwardList(_) => Kind::BackForwardList,
            Marshaled::BackForwardListItem(_) => Kind::BackForwardListItem,
            Marshaled::CookieManager(_) => Kind::CookieManager,
            Marshaled::Download(_) => Kind::Download,
            Marshaled::FaviconDatabase(_) => Kind::FaviconDatabase,
            Marshaled::SecurityManager(_) => Kind::SecurityManager,
            Marshaled::UriRequest(_) => Kind::UriRequest,
            Marshaled::WebContext(_) => Kind::WebContext,
            Marshaled::WebView(_) => Kind::WebView,
            Marshaled::WebViewGroup(_) => Kind::WebViewGroup,
            Marshaled::CertificateInfo(_) => Kind::CertificateInfo,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Marshaled::Null(_))
    }
}

fn convert_enum<'a, E>(value: &ValueRef<'a>) -> Result<Borrowed<'a, Marshaled>>
where
    E: GlibEnum + Into<Marshaled>,
{
    let raw = unsafe { ffi::g_value_get_enum(value.as_ptr()) };
    Ok(Borrowed::new(E::from_glib(raw)?.into()))
}

// The container keeps its reference, so the wrapper is borrowed
fn convert_object<'a, T>(value: &ValueRef<'a>) -> Result<Borrowed<'a, Marshaled>>
where
    T: ObjectType + Into<Marshaled>,
{
    let ptr = unsafe { ffi::g_value_get_object(value.as_ptr()) };
    let marshaled = match NonNull::new(ptr.cast::<GObject>()) {
        Some(ptr) => unsafe { T::wrap(ObjectRef::borrowed(ptr)) }.into(),
        None => Marshaled::Null(T::KIND),
    };
    Ok(Borrowed::new(marshaled))
}

fn convert_certificate_info<'a>(value: &ValueRef<'a>) -> Result<Borrowed<'a, Marshaled>> {
    let ptr = unsafe { ffi::g_value_get_boxed(value.as_ptr()) };
    let marshaled = match NonNull::new(ptr.cast()) {
        Some(ptr) => CertificateInfo::from_handle(unsafe { BoxedRef::borrowed(ptr) }).into(),
        None => Marshaled::Null(Kind::CertificateInfo),
    };
    Ok(Borrowed::new(marshaled))
}
