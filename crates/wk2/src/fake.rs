//! In-process stand-in for GObject and WebKit2GTK
//!
//! Test builds route every foreign call here instead of the system libraries.
//! Objects are plain records keyed by a made-up address, reference counts
//! are tracked per object, and every ref, unref and free is counted. Releasing
//! something that is already gone panics, so a double release fails the test
//! that caused it.
//!
//! State is per thread. Call [`session`] at the start of each test; the
//! returned guard clears the state again when it drops.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::ffi::{CStr, CString};
use std::ptr;

pub use wk2_sys::wk_glib::g_value_type;
pub use wk2_sys::wk_types::*;

pub const G_TYPE_INT: GType = 24;

const CACHE_MODEL_TYPE: GType = 0x1000;
const LOAD_EVENT_TYPE: GType = 0x1010;
const PROCESS_MODEL_TYPE: GType = 0x1020;
const TLS_ERRORS_POLICY_TYPE: GType = 0x1030;
const BACK_FORWARD_LIST_TYPE: GType = 0x1040;
const BACK_FORWARD_LIST_ITEM_TYPE: GType = 0x1050;
const COOKIE_MANAGER_TYPE: GType = 0x1060;
const DOWNLOAD_TYPE: GType = 0x1070;
const FAVICON_DATABASE_TYPE: GType = 0x1080;
const SECURITY_MANAGER_TYPE: GType = 0x1090;
const URI_REQUEST_TYPE: GType = 0x10a0;
const WEB_CONTEXT_TYPE: GType = 0x10b0;
const WEB_VIEW_TYPE: GType = 0x10c0;
const WEB_VIEW_GROUP_TYPE: GType = 0x10d0;
const CERTIFICATE_INFO_TYPE: GType = 0x10e0;

/// Object kinds the fake can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeKind {
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
}

impl FakeKind {
    fn gtype(self) -> GType {
        match self {
            FakeKind::BackForwardList => BACK_FORWARD_LIST_TYPE,
            FakeKind::BackForwardListItem => BACK_FORWARD_LIST_ITEM_TYPE,
            FakeKind::CookieManager => COOKIE_MANAGER_TYPE,
            FakeKind::Download => DOWNLOAD_TYPE,
            FakeKind::FaviconDatabase => FAVICON_DATABASE_TYPE,
            FakeKind::SecurityManager => SECURITY_MANAGER_TYPE,
            FakeKind::UriRequest => URI_REQUEST_TYPE,
            FakeKind::WebContext => WEB_CONTEXT_TYPE,
            FakeKind::WebView => WEB_VIEW_TYPE,
            FakeKind::WebViewGroup => WEB_VIEW_GROUP_TYPE,
        }
    }
}

/// Calls made through the fake since the session started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub ref_sink: usize,
    pub unref: usize,
    pub boxed_free: usize,
    pub g_free: usize,
    pub list_free: usize,
}

#[derive(Default)]
struct Props {
    uri: Option<CString>,
    original_uri: Option<CString>,
    title: Option<CString>,
    name: Option<CString>,
    destination: Option<CString>,
    custom_charset: Option<CString>,
    favicon_directory: Option<CString>,
    directories: HashMap<&'static str, String>,
    cache_model: i32,
    process_model: i32,
    tls_errors_policy: i32,
    spell_checking: bool,
    // Owns the strings `spell_ptrs` points into
    _spell_languages: Vec<CString>,
    spell_ptrs: Vec<*const gchar>,
    preferred_languages: Vec<String>,
    allowed_hosts: Vec<String>,
    cookie_deletions: Vec<String>,
    favicons: HashMap<String, String>,
    schemes: HashSet<(&'static str, String)>,
    cancelled: bool,
    loading: bool,
    progress: f64,
    page_id: u64,
    // Related objects, each holding one reference
    related: HashMap<FakeKind, usize>,
    // History entries, each holding one reference
    items: Vec<usize>,
    current: Option<usize>,
}

struct FakeObject {
    kind: FakeKind,
    refcount: u32,
    floating: bool,
    props: Props,
}

enum Allocation {
    Str(*mut gchar),
    Node(*mut GList),
}

impl Drop for Allocation {
    fn drop(&mut self) {
        unsafe {
            match *self {
                Allocation::Str(ptr) => drop(CString::from_raw(ptr)),
                Allocation::Node(ptr) => drop(Box::from_raw(ptr)),
            }
        }
    }
}

#[derive(Default)]
struct State {
    objects: HashMap<usize, FakeObject>,
    certificates: HashMap<usize, GTlsCertificateFlags>,
    allocations: HashMap<usize, Allocation>,
    counters: Counters,
    failing: HashSet<String>,
    default_context: Option<usize>,
    next_page_id: u64,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
    // Not reset between sessions, so stale addresses are never reused
    static NEXT_ADDR: Cell<usize> = const { Cell::new(0x10_0000) };
}

fn next_addr() -> usize {
    NEXT_ADDR.with(|next| {
        let addr = next.get();
        next.set(addr + 0x40);
        addr
    })
}

fn with_state<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

fn addr<T>(ptr: *mut T) -> usize {
    ptr as usize
}

fn to_ptr<T>(addr: Option<usize>) -> *mut T {
    addr.map_or(ptr::null_mut(), |addr| addr as *mut T)
}

fn str_ptr(value: &Option<CString>) -> *const gchar {
    value.as_ref().map_or(ptr::null(), |s| s.as_ptr())
}

fn blank() -> CString {
    CString::new("about:blank").expect("static string")
}

unsafe fn read(ptr: *const gchar) -> CString {
    assert!(!ptr.is_null(), "NULL passed for a required string");
    CStr::from_ptr(ptr).to_owned()
}

unsafe fn read_opt(ptr: *const gchar) -> Option<CString> {
    if ptr.is_null() {
        None
    } else {
        Some(read(ptr))
    }
}

unsafe fn read_string(ptr: *const gchar) -> String {
    read(ptr).to_string_lossy().into_owned()
}

unsafe fn read_strv(strv: *const *const gchar) -> Vec<CString> {
    let mut out = Vec::new();
    let mut cursor = strv;
    while !(*cursor).is_null() {
        out.push(read(*cursor));
        cursor = cursor.add(1);
    }
    out
}

impl State {
    fn create(&mut self, kind: FakeKind) -> usize {
        let addr = next_addr();
        self.objects.insert(
            addr,
            FakeObject {
                kind,
                refcount: 1,
                floating: matches!(kind, FakeKind::WebView | FakeKind::BackForwardListItem),
                props: Props::default(),
            },
        );
        addr
    }

    fn object(&mut self, addr: usize) -> &mut FakeObject {
        match self.objects.get_mut(&addr) {
            Some(object) => object,
            None => panic!("use of dead object {:#x}", addr),
        }
    }

    fn props(&mut self, addr: usize) -> &mut Props {
        &mut self.object(addr).props
    }

    fn retain(&mut self, addr: usize) {
        self.object(addr).refcount += 1;
    }

    fn release(&mut self, addr: usize) {
        let object = self.object(addr);
        object.refcount -= 1;
        if object.refcount > 0 {
            return;
        }
        if let Some(object) = self.objects.remove(&addr) {
            let held = object.props.related.into_values().chain(object.props.items);
            for child in held {
                self.release_held(child);
            }
        }
    }

    /// Drop a held reference, and the floating one if nobody claimed it
    fn release_held(&mut self, addr: usize) {
        self.release(addr);
        if self.objects.get(&addr).is_some_and(|o| o.floating) {
            self.release(addr);
        }
    }

    fn fails(&mut self, name: &str) -> bool {
        self.failing.remove(name)
    }

    fn default_context(&mut self) -> usize {
        if let Some(addr) = self.default_context.filter(|a| self.objects.contains_key(a)) {
            return addr;
        }
        let addr = self.create(FakeKind::WebContext);
        let props = self.props(addr);
        props.cache_model = WEBKIT_CACHE_MODEL_WEB_BROWSER;
        props.tls_errors_policy = WEBKIT_TLS_ERRORS_POLICY_FAIL;
        self.default_context = Some(addr);
        addr
    }

    /// Related object of `kind`, created on first use and owned by `parent`
    fn child(&mut self, parent: usize, kind: FakeKind) -> usize {
        if let Some(&addr) = self.props(parent).related.get(&kind) {
            return addr;
        }
        let addr = self.create(kind);
        self.props(parent).related.insert(kind, addr);
        addr
    }

    /// Make `parent` hold a new reference on an existing object
    fn attach(&mut self, parent: usize, kind: FakeKind, child: usize) {
        self.retain(child);
        if let Some(old) = self.props(parent).related.insert(kind, child) {
            self.release(old);
        }
    }

    fn related(&mut self, parent: usize, kind: FakeKind) -> Option<usize> {
        self.props(parent).related.get(&kind).copied()
    }

    fn alloc_string(&mut self, value: &str) -> *mut gchar {
        let raw = CString::new(value).expect("string with NUL").into_raw();
        self.allocations.insert(raw as usize, Allocation::Str(raw));
        raw
    }

    fn alloc_list(&mut self, data: &[gpointer]) -> *mut GList {
        let mut head: *mut GList = ptr::null_mut();
        let mut tail: *mut GList = ptr::null_mut();
        for &item in data {
            let node = Box::into_raw(Box::new(GList {
                data: item,
                next: ptr::null_mut(),
                prev: tail,
            }));
            if tail.is_null() {
                head = node;
            } else {
                unsafe { (*tail).next = node };
            }
            tail = node;
            self.allocations.insert(node as usize, Allocation::Node(node));
        }
        head
    }

    fn new_view(&mut self, context: usize, group: Option<usize>) -> usize {
        let view = self.create(FakeKind::WebView);
        self.attach(view, FakeKind::WebContext, context);
        if let Some(group) = group {
            self.attach(view, FakeKind::WebViewGroup, group);
        }
        self.next_page_id += 1;
        let page_id = self.next_page_id;
        self.props(view).page_id = page_id;
        view
    }

    fn history(&mut self, view: usize) -> usize {
        self.child(view, FakeKind::BackForwardList)
    }

    fn push_history(&mut self, view: usize, uri: &CStr) {
        let list = self.history(view);
        let item = self.create(FakeKind::BackForwardListItem);
        let props = self.props(item);
        props.uri = Some(uri.to_owned());
        props.original_uri = Some(uri.to_owned());
        props.title = Some(CString::default());
        // The list holds its own reference; the floating one is left for
        // whoever sinks the item first
        self.retain(item);

        let props = self.props(list);
        let keep = props.current.map_or(0, |current| current + 1);
        let dropped = props.items.split_off(keep);
        props.items.push(item);
        props.current = Some(props.items.len() - 1);
        for old in dropped {
            self.release_held(old);
        }
    }

    fn start_load(&mut self, view: usize, uri: Option<CString>) {
        let props = self.props(view);
        props.uri = uri;
        props.loading = true;
        props.progress = 0.0;
    }

    fn navigate(&mut self, view: usize, index: usize) {
        let list = self.history(view);
        let props = self.props(list);
        props.current = Some(index);
        let item = props.items[index];
        let uri = self.props(item).uri.clone();
        self.start_load(view, uri);
    }

    /// History index `offset` steps from the current entry
    fn history_index(&mut self, view_or_list: usize, offset: i64) -> Option<usize> {
        let props = self.props(view_or_list);
        let index = props.current? as i64 + offset;
        (0..props.items.len() as i64)
            .contains(&index)
            .then_some(index as usize)
    }

    fn view_history_index(&mut self, view: usize, offset: i64) -> Option<usize> {
        let list = self.history(view);
        self.history_index(list, offset)
    }

    fn history_item(&mut self, list: usize, offset: i64) -> Option<usize> {
        let index = self.history_index(list, offset)?;
        Some(self.props(list).items[index])
    }
}

// ========== Test helpers ==========

/// Guard returned by [`session`]
pub struct Session {
    _private: (),
}

impl Drop for Session {
    fn drop(&mut self) {
        reset();
    }
}

fn reset() {
    let old = STATE.with(|state| state.replace(State::default()));
    drop(old);
}

/// Start a test with empty fake state
pub fn session() -> Session {
    reset();
    Session { _private: () }
}

pub fn counters() -> Counters {
    with_state(|s| s.counters)
}

/// Make the next call of `function` return NULL
pub fn fail_next(function: &str) {
    with_state(|s| s.failing.insert(function.to_string()));
}

/// New object with one reference held by the caller (floating for views
/// and history items)
pub fn new_object(kind: FakeKind) -> *mut GObject {
    to_ptr(Some(with_state(|s| s.create(kind))))
}

pub fn refcount<T>(ptr: *mut T) -> Option<u32> {
    with_state(|s| s.objects.get(&addr(ptr)).map(|o| o.refcount))
}

pub fn is_alive<T>(ptr: *mut T) -> bool {
    with_state(|s| s.objects.contains_key(&addr(ptr)))
}

pub fn is_floating<T>(ptr: *mut T) -> bool {
    with_state(|s| s.objects.get(&addr(ptr)).is_some_and(|o| o.floating))
}

/// Add a reference without going through the counted entry points
pub fn add_ref<T>(ptr: *mut T) {
    with_state(|s| s.retain(addr(ptr)))
}

/// Drop a reference held outside the bridge
pub fn release_external<T>(ptr: *mut T) {
    with_state(|s| s.release(addr(ptr)))
}

pub fn live_objects() -> usize {
    with_state(|s| s.objects.len())
}

pub fn new_certificate(tls_errors: GTlsCertificateFlags) -> *mut WebKitCertificateInfo {
    let addr = next_addr();
    with_state(|s| s.certificates.insert(addr, tls_errors));
    to_ptr(Some(addr))
}

pub fn certificate_alive(ptr: *mut WebKitCertificateInfo) -> bool {
    with_state(|s| s.certificates.contains_key(&addr(ptr)))
}

pub fn live_certificates() -> usize {
    with_state(|s| s.certificates.len())
}

/// String allocated as if by GLib, to be released with `g_free`
pub fn alloc_string(value: &str) -> *mut gchar {
    with_state(|s| s.alloc_string(value))
}

/// List allocated as if by GLib, to be released with `g_list_free`
pub fn alloc_list(data: &[gpointer]) -> *mut GList {
    with_state(|s| s.alloc_list(data))
}

/// Strings and list nodes not yet released
pub fn live_allocations() -> usize {
    with_state(|s| s.allocations.len())
}

fn value(gtype: GType, data: GValueData) -> GValue {
    let mut value = GValue::zeroed();
    value.g_type = gtype;
    value.data[0] = data;
    value
}

/// Value holding an object created by the fake
pub fn object_value(object: *mut GObject) -> GValue {
    let gtype = with_state(|s| s.object(addr(object)).kind.gtype());
    value(gtype, GValueData { v_pointer: object.cast() })
}

pub fn null_object_value(gtype: GType) -> GValue {
    value(gtype, GValueData { v_pointer: ptr::null_mut() })
}

pub fn int_value(v: i32) -> GValue {
    value(G_TYPE_INT, GValueData { v_int: v })
}

pub fn enum_value(gtype: GType, v: i32) -> GValue {
    value(gtype, GValueData { v_int: v })
}

pub fn boxed_value(gtype: GType, boxed: gpointer) -> GValue {
    value(gtype, GValueData { v_pointer: boxed })
}

pub fn preferred_languages<T>(context: *mut T) -> Vec<String> {
    with_state(|s| s.props(addr(context)).preferred_languages.clone())
}

pub fn allowed_hosts<T>(context: *mut T) -> Vec<String> {
    with_state(|s| s.props(addr(context)).allowed_hosts.clone())
}

pub fn set_favicon<T>(database: *mut T, page_uri: &str, favicon_uri: &str) {
    with_state(|s| {
        s.props(addr(database))
            .favicons
            .insert(page_uri.to_string(), favicon_uri.to_string())
    });
}

pub fn cookie_deletions<T>(manager: *mut T) -> Vec<String> {
    with_state(|s| s.props(addr(manager)).cookie_deletions.clone())
}

/// Directory set on a context: `plugins`, `web-extensions` or `disk-cache`
pub fn directory<T>(context: *mut T, key: &str) -> Option<String> {
    with_state(|s| s.props(addr(context)).directories.get(key).cloned())
}

pub fn download_cancelled<T>(download: *mut T) -> bool {
    with_state(|s| s.props(addr(download)).cancelled)
}

// ========== GLib / GObject ==========

pub unsafe fn g_object_ref_sink(object: gpointer) -> gpointer {
    with_state(|s| {
        s.counters.ref_sink += 1;
        let object = s.object(addr(object));
        if object.floating {
            object.floating = false;
        } else {
            object.refcount += 1;
        }
    });
    object
}

pub unsafe fn g_object_unref(object: gpointer) {
    with_state(|s| {
        s.counters.unref += 1;
        s.release(addr(object));
    })
}

pub unsafe fn g_value_get_object(value: *const GValue) -> gpointer {
    (*value).data[0].v_pointer
}

pub unsafe fn g_value_get_boxed(value: *const GValue) -> gpointer {
    (*value).data[0].v_pointer
}

pub unsafe fn g_value_get_enum(value: *const GValue) -> gint {
    (*value).data[0].v_int
}

pub unsafe fn g_type_name(gtype: GType) -> *const gchar {
    let name: &[u8] = match gtype {
        G_TYPE_INT => b"gint\0",
        CACHE_MODEL_TYPE => b"WebKitCacheModel\0",
        LOAD_EVENT_TYPE => b"WebKitLoadEvent\0",
        PROCESS_MODEL_TYPE => b"WebKitProcessModel\0",
        TLS_ERRORS_POLICY_TYPE => b"WebKitTLSErrorsPolicy\0",
        BACK_FORWARD_LIST_TYPE => b"WebKitBackForwardList\0",
        BACK_FORWARD_LIST_ITEM_TYPE => b"WebKitBackForwardListItem\0",
        COOKIE_MANAGER_TYPE => b"WebKitCookieManager\0",
        DOWNLOAD_TYPE => b"WebKitDownload\0",
        FAVICON_DATABASE_TYPE => b"WebKitFaviconDatabase\0",
        SECURITY_MANAGER_TYPE => b"WebKitSecurityManager\0",
        URI_REQUEST_TYPE => b"WebKitURIRequest\0",
        WEB_CONTEXT_TYPE => b"WebKitWebContext\0",
        WEB_VIEW_TYPE => b"WebKitWebView\0",
        WEB_VIEW_GROUP_TYPE => b"WebKitWebViewGroup\0",
        CERTIFICATE_INFO_TYPE => b"WebKitCertificateInfo\0",
        _ => return ptr::null(),
    };
    name.as_ptr().cast()
}

pub unsafe fn g_free(mem: gpointer) {
    with_state(|s| {
        s.counters.g_free += 1;
        if s.allocations.remove(&addr(mem)).is_none() {
            panic!("g_free of unknown pointer {:p}", mem);
        }
    })
}

pub unsafe fn g_list_free(list: *mut GList) {
    let mut nodes = Vec::new();
    let mut node = list;
    while !node.is_null() {
        nodes.push(addr(node));
        node = (*node).next;
    }
    with_state(|s| {
        s.counters.list_free += 1;
        for node in nodes {
            if s.allocations.remove(&node).is_none() {
                panic!("g_list_free of unknown node {:#x}", node);
            }
        }
    })
}

// ========== Types ==========

pub unsafe fn webkit_cache_model_get_type() -> GType {
    CACHE_MODEL_TYPE
}

pub unsafe fn webkit_load_event_get_type() -> GType {
    LOAD_EVENT_TYPE
}

pub unsafe fn webkit_process_model_get_type() -> GType {
    PROCESS_MODEL_TYPE
}

pub unsafe fn webkit_tls_errors_policy_get_type() -> GType {
    TLS_ERRORS_POLICY_TYPE
}

pub unsafe fn webkit_back_forward_list_get_type() -> GType {
    BACK_FORWARD_LIST_TYPE
}

pub unsafe fn webkit_back_forward_list_item_get_type() -> GType {
    BACK_FORWARD_LIST_ITEM_TYPE
}

pub unsafe fn webkit_cookie_manager_get_type() -> GType {
    COOKIE_MANAGER_TYPE
}

pub unsafe fn webkit_download_get_type() -> GType {
    DOWNLOAD_TYPE
}

pub unsafe fn webkit_favicon_database_get_type() -> GType {
    FAVICON_DATABASE_TYPE
}

pub unsafe fn webkit_security_manager_get_type() -> GType {
    SECURITY_MANAGER_TYPE
}

pub unsafe fn webkit_uri_request_get_type() -> GType {
    URI_REQUEST_TYPE
}

pub unsafe fn webkit_web_context_get_type() -> GType {
    WEB_CONTEXT_TYPE
}

pub unsafe fn webkit_web_view_get_type() -> GType {
    WEB_VIEW_TYPE
}

pub unsafe fn webkit_web_view_group_get_type() -> GType {
    WEB_VIEW_GROUP_TYPE
}

pub unsafe fn webkit_certificate_info_get_type() -> GType {
    CERTIFICATE_INFO_TYPE
}

// ========== WebKitWebContext ==========

pub unsafe fn webkit_web_context_get_default() -> *mut WebKitWebContext {
    with_state(|s| {
        if s.fails("webkit_web_context_get_default") {
            return ptr::null_mut();
        }
        to_ptr(Some(s.default_context()))
    })
}

pub unsafe fn webkit_web_context_get_cache_model(context: *mut WebKitWebContext) -> WebKitCacheModel {
    with_state(|s| s.props(addr(context)).cache_model)
}

pub unsafe fn webkit_web_context_set_cache_model(
    context: *mut WebKitWebContext,
    model: WebKitCacheModel,
) {
    with_state(|s| s.props(addr(context)).cache_model = model)
}

pub unsafe fn webkit_web_context_clear_cache(context: *mut WebKitWebContext) {
    with_state(|s| {
        s.props(addr(context));
    })
}

pub unsafe fn webkit_web_context_download_uri(
    context: *mut WebKitWebContext,
    uri: *const gchar,
) -> *mut WebKitDownload {
    let uri = read(uri);
    with_state(|s| {
        s.props(addr(context));
        if s.fails("webkit_web_context_download_uri") {
            return ptr::null_mut();
        }
        let download = s.create(FakeKind::Download);
        let request = s.child(download, FakeKind::UriRequest);
        s.props(request).uri = Some(uri);
        to_ptr(Some(download))
    })
}

pub unsafe fn webkit_web_context_get_cookie_manager(
    context: *mut WebKitWebContext,
) -> *mut WebKitCookieManager {
    with_state(|s| to_ptr(Some(s.child(addr(context), FakeKind::CookieManager))))
}

pub unsafe fn webkit_web_context_get_favicon_database(
    context: *mut WebKitWebContext,
) -> *mut WebKitFaviconDatabase {
    with_state(|s| to_ptr(Some(s.child(addr(context), FakeKind::FaviconDatabase))))
}

pub unsafe fn webkit_web_context_set_favicon_database_directory(
    context: *mut WebKitWebContext,
    path: *const gchar,
) {
    let path = read_opt(path);
    with_state(|s| s.props(addr(context)).favicon_directory = path)
}

pub unsafe fn webkit_web_context_get_favicon_database_directory(
    context: *mut WebKitWebContext,
) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(context)).favicon_directory))
}

pub unsafe fn webkit_web_context_get_security_manager(
    context: *mut WebKitWebContext,
) -> *mut WebKitSecurityManager {
    with_state(|s| to_ptr(Some(s.child(addr(context), FakeKind::SecurityManager))))
}

unsafe fn set_directory(context: *mut WebKitWebContext, key: &'static str, path: *const gchar) {
    let path = read_string(path);
    with_state(|s| {
        s.props(addr(context)).directories.insert(key, path);
    })
}

pub unsafe fn webkit_web_context_set_additional_plugins_directory(
    context: *mut WebKitWebContext,
    directory: *const gchar,
) {
    set_directory(context, "plugins", directory)
}

pub unsafe fn webkit_web_context_set_web_extensions_directory(
    context: *mut WebKitWebContext,
    directory: *const gchar,
) {
    set_directory(context, "web-extensions", directory)
}

pub unsafe fn webkit_web_context_set_disk_cache_directory(
    context: *mut WebKitWebContext,
    directory: *const gchar,
) {
    set_directory(context, "disk-cache", directory)
}

pub unsafe fn webkit_web_context_get_spell_checking_enabled(
    context: *mut WebKitWebContext,
) -> gboolean {
    with_state(|s| if s.props(addr(context)).spell_checking { GTRUE } else { GFALSE })
}

pub unsafe fn webkit_web_context_set_spell_checking_enabled(
    context: *mut WebKitWebContext,
    enabled: gboolean,
) {
    with_state(|s| s.props(addr(context)).spell_checking = enabled != GFALSE)
}

pub unsafe fn webkit_web_context_get_spell_checking_languages(
    context: *mut WebKitWebContext,
) -> *const *const gchar {
    with_state(|s| {
        let props = s.props(addr(context));
        if props.spell_ptrs.is_empty() {
            ptr::null()
        } else {
            props.spell_ptrs.as_ptr()
        }
    })
}

pub unsafe fn webkit_web_context_set_spell_checking_languages(
    context: *mut WebKitWebContext,
    languages: *const *const gchar,
) {
    let languages = read_strv(languages);
    with_state(|s| {
        let props = s.props(addr(context));
        props.spell_ptrs = languages.iter().map(|l| l.as_ptr()).collect();
        props.spell_ptrs.push(ptr::null());
        props._spell_languages = languages;
    })
}

pub unsafe fn webkit_web_context_set_preferred_languages(
    context: *mut WebKitWebContext,
    languages: *const *const gchar,
) {
    let languages = read_strv(languages)
        .into_iter()
        .map(|l| l.to_string_lossy().into_owned())
        .collect();
    with_state(|s| s.props(addr(context)).preferred_languages = languages)
}

pub unsafe fn webkit_web_context_set_tls_errors_policy(
    context: *mut WebKitWebContext,
    policy: WebKitTLSErrorsPolicy,
) {
    with_state(|s| s.props(addr(context)).tls_errors_policy = policy)
}

pub unsafe fn webkit_web_context_get_tls_errors_policy(
    context: *mut WebKitWebContext,
) -> WebKitTLSErrorsPolicy {
    with_state(|s| s.props(addr(context)).tls_errors_policy)
}

pub unsafe fn webkit_web_context_prefetch_dns(context: *mut WebKitWebContext, hostname: *const gchar) {
    read(hostname);
    with_state(|s| {
        s.props(addr(context));
    })
}

pub unsafe fn webkit_web_context_allow_tls_certificate_for_host(
    context: *mut WebKitWebContext,
    info: *mut WebKitCertificateInfo,
    host: *const gchar,
) {
    let host = read_string(host);
    with_state(|s| {
        assert!(s.certificates.contains_key(&addr(info)), "dead certificate info");
        s.props(addr(context)).allowed_hosts.push(host);
    })
}

pub unsafe fn webkit_web_context_get_process_model(
    context: *mut WebKitWebContext,
) -> WebKitProcessModel {
    with_state(|s| s.props(addr(context)).process_model)
}

pub unsafe fn webkit_web_context_set_process_model(
    context: *mut WebKitWebContext,
    model: WebKitProcessModel,
) {
    with_state(|s| s.props(addr(context)).process_model = model)
}

// ========== Managers ==========

pub unsafe fn webkit_cookie_manager_delete_all_cookies(manager: *mut WebKitCookieManager) {
    with_state(|s| s.props(addr(manager)).cookie_deletions.push("*".to_string()))
}

pub unsafe fn webkit_cookie_manager_delete_cookies_for_domain(
    manager: *mut WebKitCookieManager,
    domain: *const gchar,
) {
    let domain = read_string(domain);
    with_state(|s| s.props(addr(manager)).cookie_deletions.push(domain))
}

pub unsafe fn webkit_favicon_database_get_favicon_uri(
    database: *mut WebKitFaviconDatabase,
    page_uri: *const gchar,
) -> *mut gchar {
    let page_uri = read_string(page_uri);
    with_state(|s| match s.props(addr(database)).favicons.get(&page_uri).cloned() {
        Some(uri) => s.alloc_string(&uri),
        None => ptr::null_mut(),
    })
}

pub unsafe fn webkit_favicon_database_clear(database: *mut WebKitFaviconDatabase) {
    with_state(|s| s.props(addr(database)).favicons.clear())
}

unsafe fn register_scheme(manager: *mut WebKitSecurityManager, policy: &'static str, scheme: *const gchar) {
    let scheme = read_string(scheme);
    with_state(|s| {
        s.props(addr(manager)).schemes.insert((policy, scheme));
    })
}

unsafe fn scheme_has(
    manager: *mut WebKitSecurityManager,
    policy: &'static str,
    scheme: *const gchar,
) -> gboolean {
    let scheme = read_string(scheme);
    with_state(|s| {
        if s.props(addr(manager)).schemes.contains(&(policy, scheme)) {
            GTRUE
        } else {
            GFALSE
        }
    })
}

pub unsafe fn webkit_security_manager_register_uri_scheme_as_local(
    manager: *mut WebKitSecurityManager,
    scheme: *const gchar,
) {
    register_scheme(manager, "local", scheme)
}

pub unsafe fn webkit_security_manager_uri_scheme_is_local(
    manager: *mut WebKitSecurityManager,
    scheme: *const gchar,
) -> gboolean {
    scheme_has(manager, "local", scheme)
}

pub unsafe fn webkit_security_manager_register_uri_scheme_as_secure(
    manager: *mut WebKitSecurityManager,
    scheme: *const gchar,
) {
    register_scheme(manager, "secure", scheme)
}

pub unsafe fn webkit_security_manager_uri_scheme_is_secure(
    manager: *mut WebKitSecurityManager,
    scheme: *const gchar,
) -> gboolean {
    scheme_has(manager, "secure", scheme)
}

pub unsafe fn webkit_security_manager_register_uri_scheme_as_cors_enabled(
    manager: *mut WebKitSecurityManager,
    scheme: *const gchar,
) {
    register_scheme(manager, "cors", scheme)
}

pub unsafe fn webkit_security_manager_uri_scheme_is_cors_enabled(
    manager: *mut WebKitSecurityManager,
    scheme: *const gchar,
) -> gboolean {
    scheme_has(manager, "cors", scheme)
}

// ========== History ==========

pub unsafe fn webkit_back_forward_list_get_length(list: *mut WebKitBackForwardList) -> guint {
    with_state(|s| s.props(addr(list)).items.len() as guint)
}

pub unsafe fn webkit_back_forward_list_get_current_item(
    list: *mut WebKitBackForwardList,
) -> *mut WebKitBackForwardListItem {
    with_state(|s| to_ptr(s.history_item(addr(list), 0)))
}

pub unsafe fn webkit_back_forward_list_get_back_item(
    list: *mut WebKitBackForwardList,
) -> *mut WebKitBackForwardListItem {
    with_state(|s| to_ptr(s.history_item(addr(list), -1)))
}

pub unsafe fn webkit_back_forward_list_get_forward_item(
    list: *mut WebKitBackForwardList,
) -> *mut WebKitBackForwardListItem {
    with_state(|s| to_ptr(s.history_item(addr(list), 1)))
}

pub unsafe fn webkit_back_forward_list_get_nth_item(
    list: *mut WebKitBackForwardList,
    index: gint,
) -> *mut WebKitBackForwardListItem {
    with_state(|s| to_ptr(s.history_item(addr(list), index as i64)))
}

pub unsafe fn webkit_back_forward_list_get_back_list(list: *mut WebKitBackForwardList) -> *mut GList {
    with_state(|s| {
        let props = s.props(addr(list));
        let end = props.current.unwrap_or(0);
        let data: Vec<gpointer> = props.items[..end].iter().map(|&a| a as gpointer).collect();
        s.alloc_list(&data)
    })
}

pub unsafe fn webkit_back_forward_list_get_forward_list(
    list: *mut WebKitBackForwardList,
) -> *mut GList {
    with_state(|s| {
        let props = s.props(addr(list));
        let start = props.current.map_or(props.items.len(), |current| current + 1);
        let data: Vec<gpointer> = props.items[start..].iter().map(|&a| a as gpointer).collect();
        s.alloc_list(&data)
    })
}

pub unsafe fn webkit_back_forward_list_item_get_uri(
    item: *mut WebKitBackForwardListItem,
) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(item)).uri))
}

pub unsafe fn webkit_back_forward_list_item_get_title(
    item: *mut WebKitBackForwardListItem,
) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(item)).title))
}

pub unsafe fn webkit_back_forward_list_item_get_original_uri(
    item: *mut WebKitBackForwardListItem,
) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(item)).original_uri))
}

// ========== Network ==========

pub unsafe fn webkit_uri_request_new(uri: *const gchar) -> *mut WebKitURIRequest {
    let uri = read(uri);
    with_state(|s| {
        if s.fails("webkit_uri_request_new") {
            return ptr::null_mut();
        }
        let request = s.create(FakeKind::UriRequest);
        s.props(request).uri = Some(uri);
        to_ptr(Some(request))
    })
}

pub unsafe fn webkit_uri_request_get_uri(request: *mut WebKitURIRequest) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(request)).uri))
}

pub unsafe fn webkit_uri_request_set_uri(request: *mut WebKitURIRequest, uri: *const gchar) {
    let uri = read(uri);
    with_state(|s| s.props(addr(request)).uri = Some(uri))
}

pub unsafe fn webkit_download_get_request(download: *mut WebKitDownload) -> *mut WebKitURIRequest {
    with_state(|s| to_ptr(s.related(addr(download), FakeKind::UriRequest)))
}

pub unsafe fn webkit_download_get_destination(download: *mut WebKitDownload) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(download)).destination))
}

pub unsafe fn webkit_download_set_destination(download: *mut WebKitDownload, uri: *const gchar) {
    let uri = read(uri);
    with_state(|s| s.props(addr(download)).destination = Some(uri))
}

pub unsafe fn webkit_download_cancel(download: *mut WebKitDownload) {
    with_state(|s| s.props(addr(download)).cancelled = true)
}

pub unsafe fn webkit_download_get_estimated_progress(download: *mut WebKitDownload) -> gdouble {
    with_state(|s| s.props(addr(download)).progress)
}

pub unsafe fn webkit_download_get_elapsed_time(download: *mut WebKitDownload) -> gdouble {
    with_state(|s| {
        s.props(addr(download));
        0.0
    })
}

pub unsafe fn webkit_download_get_received_data_length(download: *mut WebKitDownload) -> guint64 {
    with_state(|s| {
        s.props(addr(download));
        0
    })
}

pub unsafe fn webkit_download_get_web_view(download: *mut WebKitDownload) -> *mut WebKitWebView {
    with_state(|s| to_ptr(s.related(addr(download), FakeKind::WebView)))
}

pub unsafe fn webkit_certificate_info_copy(
    info: *mut WebKitCertificateInfo,
) -> *mut WebKitCertificateInfo {
    with_state(|s| {
        let Some(&flags) = s.certificates.get(&addr(info)) else {
            panic!("copy of dead certificate info {:p}", info);
        };
        if s.fails("webkit_certificate_info_copy") {
            return ptr::null_mut();
        }
        let copy = next_addr();
        s.certificates.insert(copy, flags);
        to_ptr(Some(copy))
    })
}

pub unsafe fn webkit_certificate_info_free(info: *mut WebKitCertificateInfo) {
    with_state(|s| {
        s.counters.boxed_free += 1;
        if s.certificates.remove(&addr(info)).is_none() {
            panic!("double free of certificate info {:p}", info);
        }
    })
}

pub unsafe fn webkit_certificate_info_get_tls_errors(
    info: *mut WebKitCertificateInfo,
) -> GTlsCertificateFlags {
    with_state(|s| match s.certificates.get(&addr(info)) {
        Some(&flags) => flags,
        None => panic!("use of dead certificate info {:p}", info),
    })
}

// ========== WebKitWebView ==========

pub unsafe fn webkit_web_view_new() -> *mut GtkWidget {
    with_state(|s| {
        if s.fails("webkit_web_view_new") {
            return ptr::null_mut();
        }
        let context = s.default_context();
        to_ptr(Some(s.new_view(context, None)))
    })
}

pub unsafe fn webkit_web_view_new_with_context(context: *mut WebKitWebContext) -> *mut GtkWidget {
    with_state(|s| {
        if s.fails("webkit_web_view_new_with_context") {
            return ptr::null_mut();
        }
        to_ptr(Some(s.new_view(addr(context), None)))
    })
}

pub unsafe fn webkit_web_view_new_with_group(group: *mut WebKitWebViewGroup) -> *mut GtkWidget {
    with_state(|s| {
        if s.fails("webkit_web_view_new_with_group") {
            return ptr::null_mut();
        }
        let context = s.default_context();
        to_ptr(Some(s.new_view(context, Some(addr(group)))))
    })
}

pub unsafe fn webkit_web_view_get_context(view: *mut WebKitWebView) -> *mut WebKitWebContext {
    with_state(|s| to_ptr(s.related(addr(view), FakeKind::WebContext)))
}

pub unsafe fn webkit_web_view_get_group(view: *mut WebKitWebView) -> *mut WebKitWebViewGroup {
    with_state(|s| to_ptr(s.related(addr(view), FakeKind::WebViewGroup)))
}

pub unsafe fn webkit_web_view_get_back_forward_list(
    view: *mut WebKitWebView,
) -> *mut WebKitBackForwardList {
    with_state(|s| to_ptr(Some(s.history(addr(view)))))
}

pub unsafe fn webkit_web_view_load_uri(view: *mut WebKitWebView, uri: *const gchar) {
    let uri = read(uri);
    with_state(|s| {
        s.push_history(addr(view), &uri);
        s.start_load(addr(view), Some(uri));
    })
}

pub unsafe fn webkit_web_view_load_html(
    view: *mut WebKitWebView,
    content: *const gchar,
    base_uri: *const gchar,
) {
    read(content);
    let uri = read_opt(base_uri).unwrap_or_else(|| blank());
    with_state(|s| s.start_load(addr(view), Some(uri)))
}

pub unsafe fn webkit_web_view_load_alternate_html(
    view: *mut WebKitWebView,
    content: *const gchar,
    content_uri: *const gchar,
    base_uri: *const gchar,
) {
    read(content);
    read_opt(base_uri);
    let uri = read(content_uri);
    with_state(|s| s.start_load(addr(view), Some(uri)))
}

pub unsafe fn webkit_web_view_load_plain_text(view: *mut WebKitWebView, plain_text: *const gchar) {
    read(plain_text);
    with_state(|s| s.start_load(addr(view), Some(blank())))
}

pub unsafe fn webkit_web_view_load_request(view: *mut WebKitWebView, request: *mut WebKitURIRequest) {
    with_state(|s| {
        let uri = s.props(addr(request)).uri.clone().unwrap_or_default();
        s.push_history(addr(view), &uri);
        s.start_load(addr(view), Some(uri));
    })
}

pub unsafe fn webkit_web_view_reload(view: *mut WebKitWebView) {
    with_state(|s| {
        let uri = s.props(addr(view)).uri.clone();
        s.start_load(addr(view), uri);
    })
}

pub unsafe fn webkit_web_view_reload_bypass_cache(view: *mut WebKitWebView) {
    webkit_web_view_reload(view)
}

pub unsafe fn webkit_web_view_stop_loading(view: *mut WebKitWebView) {
    with_state(|s| {
        let props = s.props(addr(view));
        props.loading = false;
        props.progress = 1.0;
    })
}

pub unsafe fn webkit_web_view_is_loading(view: *mut WebKitWebView) -> gboolean {
    with_state(|s| if s.props(addr(view)).loading { GTRUE } else { GFALSE })
}

pub unsafe fn webkit_web_view_get_estimated_load_progress(view: *mut WebKitWebView) -> gdouble {
    with_state(|s| s.props(addr(view)).progress)
}

pub unsafe fn webkit_web_view_can_go_back(view: *mut WebKitWebView) -> gboolean {
    with_state(|s| if s.view_history_index(addr(view), -1).is_some() { GTRUE } else { GFALSE })
}

pub unsafe fn webkit_web_view_can_go_forward(view: *mut WebKitWebView) -> gboolean {
    with_state(|s| if s.view_history_index(addr(view), 1).is_some() { GTRUE } else { GFALSE })
}

pub unsafe fn webkit_web_view_go_back(view: *mut WebKitWebView) {
    with_state(|s| {
        if let Some(index) = s.view_history_index(addr(view), -1) {
            s.navigate(addr(view), index);
        }
    })
}

pub unsafe fn webkit_web_view_go_forward(view: *mut WebKitWebView) {
    with_state(|s| {
        if let Some(index) = s.view_history_index(addr(view), 1) {
            s.navigate(addr(view), index);
        }
    })
}

pub unsafe fn webkit_web_view_go_to_back_forward_list_item(
    view: *mut WebKitWebView,
    item: *mut WebKitBackForwardListItem,
) {
    with_state(|s| {
        let list = s.history(addr(view));
        let position = s.props(list).items.iter().position(|&i| i == addr(item));
        if let Some(index) = position {
            s.navigate(addr(view), index);
        }
    })
}

pub unsafe fn webkit_web_view_get_title(view: *mut WebKitWebView) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(view)).title))
}

pub unsafe fn webkit_web_view_get_uri(view: *mut WebKitWebView) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(view)).uri))
}

pub unsafe fn webkit_web_view_get_page_id(view: *mut WebKitWebView) -> guint64 {
    with_state(|s| s.props(addr(view)).page_id)
}

pub unsafe fn webkit_web_view_get_custom_charset(view: *mut WebKitWebView) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(view)).custom_charset))
}

pub unsafe fn webkit_web_view_set_custom_charset(view: *mut WebKitWebView, charset: *const gchar) {
    let charset = read_opt(charset);
    with_state(|s| s.props(addr(view)).custom_charset = charset)
}

pub unsafe fn webkit_web_view_group_new(name: *const gchar) -> *mut WebKitWebViewGroup {
    let name = read_opt(name);
    with_state(|s| {
        if s.fails("webkit_web_view_group_new") {
            return ptr::null_mut();
        }
        let group = s.create(FakeKind::WebViewGroup);
        s.props(group).name = name;
        to_ptr(Some(group))
    })
}

pub unsafe fn webkit_web_view_group_get_name(group: *mut WebKitWebViewGroup) -> *const gchar {
    with_state(|s| str_ptr(&s.props(addr(group)).name))
}
