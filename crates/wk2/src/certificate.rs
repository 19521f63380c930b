//! TLS certificate information
//!
//! WebKitCertificateInfo is a boxed value type: it has no reference count and
//! is released with `webkit_certificate_info_free`.

use std::ptr::NonNull;

use crate::error::{BridgeError, Result};
use crate::ffi::{self, WebKitCertificateInfo};
use crate::handle::{BoxedRef, BoxedType, Ownership};
use crate::kind::{Kind, Marshaled};

/// A certificate and the TLS errors found while verifying it
#[derive(Debug)]
pub struct CertificateInfo {
    handle: BoxedRef<CertificateInfo>,
}

impl BoxedType for CertificateInfo {
    type Raw = WebKitCertificateInfo;

    const NAME: &'static str = "WebKitCertificateInfo";

    unsafe fn copy(ptr: NonNull<WebKitCertificateInfo>) -> *mut WebKitCertificateInfo {
        ffi::webkit_certificate_info_copy(ptr.as_ptr())
    }

    unsafe fn free(ptr: NonNull<WebKitCertificateInfo>) {
        ffi::webkit_certificate_info_free(ptr.as_ptr())
    }
}

impl CertificateInfo {
    pub(crate) fn from_handle(handle: BoxedRef<CertificateInfo>) -> Self {
        Self { handle }
    }

    /// Take ownership of a certificate info; it is freed when dropped
    ///
    /// Returns `None` for NULL.
    ///
    /// # Safety
    /// `ptr` must be NULL or point at a certificate info the caller owns.
    pub unsafe fn from_raw_full(ptr: *mut WebKitCertificateInfo) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self::from_handle(BoxedRef::owned(ptr)))
    }

    /// Wrap a certificate info owned elsewhere
    ///
    /// # Safety
    /// `ptr` must be NULL or stay valid as long as the wrapper is used.
    pub unsafe fn from_raw_none(ptr: *mut WebKitCertificateInfo) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self::from_handle(BoxedRef::borrowed(ptr)))
    }

    /// Raw pointer to the native value
    pub fn as_ptr(&self) -> *mut WebKitCertificateInfo {
        self.handle.as_ptr()
    }

    pub fn ownership(&self) -> Ownership {
        self.handle.ownership()
    }

    /// Owned copy of this certificate info
    pub fn copy(&self) -> Result<Self> {
        self.handle
            .copy()
            .map(Self::from_handle)
            .ok_or(BridgeError::NullHandle("webkit_certificate_info_copy"))
    }

    /// TLS verification errors, as `GTlsCertificateFlags` bits
    pub fn tls_errors(&self) -> u32 {
        unsafe { ffi::webkit_certificate_info_get_tls_errors(self.as_ptr()) }
    }

    /// Release the value now
    ///
    /// A borrowed value is left alone. Either way the wrapper is consumed, so
    /// nothing is released again when it would have been dropped.
    pub fn free(self) {
        self.handle.release()
    }
}

impl TryFrom<Marshaled> for CertificateInfo {
    type Error = BridgeError;

    fn try_from(value: Marshaled) -> Result<Self> {
        match value {
            Marshaled::CertificateInfo(info) => Ok(info),
            other => Err(BridgeError::UnexpectedKind {
                expected: Kind::CertificateInfo.name(),
                found: other.kind().name(),
            }),
        }
    }
}

impl From<CertificateInfo> for Marshaled {
    fn from(info: CertificateInfo) -> Self {
        Marshaled::CertificateInfo(info)
    }
}
