//! Navigation history
//!
//! A web view's back/forward list and its items. The list owns the items; the
//! accessors sink each item so the wrapper keeps it alive on its own. Asking
//! for an item that does not exist yields `None`, never a wrapper over NULL.

use crate::conv::{drain_glib_list, from_glib_str};
use crate::ffi::{self, WebKitBackForwardList, WebKitBackForwardListItem};
use crate::object::{object_wrapper, sink_nullable};

object_wrapper! {
    /// The back/forward list of a web view
    BackForwardList => WebKitBackForwardList, BackForwardList
}

object_wrapper! {
    /// One entry of a back/forward list
    BackForwardListItem => WebKitBackForwardListItem, BackForwardListItem
}

impl BackForwardList {
    /// Number of items, current item included
    pub fn len(&self) -> usize {
        unsafe { ffi::webkit_back_forward_list_get_length(self.as_ptr()) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item of the page shown now
    pub fn current_item(&self) -> Option<BackForwardListItem> {
        unsafe { sink_nullable(ffi::webkit_back_forward_list_get_current_item(self.as_ptr())) }
    }

    /// Item one step back
    pub fn back_item(&self) -> Option<BackForwardListItem> {
        unsafe { sink_nullable(ffi::webkit_back_forward_list_get_back_item(self.as_ptr())) }
    }

    /// Item one step forward
    pub fn forward_item(&self) -> Option<BackForwardListItem> {
        unsafe { sink_nullable(ffi::webkit_back_forward_list_get_forward_item(self.as_ptr())) }
    }

    /// Item `n` steps from the current one; negative values go back
    pub fn nth_item(&self, n: i32) -> Option<BackForwardListItem> {
        unsafe { sink_nullable(ffi::webkit_back_forward_list_get_nth_item(self.as_ptr(), n)) }
    }

    /// Items before the current one, oldest first
    pub fn back_list(&self) -> Vec<BackForwardListItem> {
        unsafe {
            drain_glib_list(ffi::webkit_back_forward_list_get_back_list(self.as_ptr()), |item| {
                sink_nullable(item.cast::<WebKitBackForwardListItem>())
            })
        }
    }

    /// Items after the current one, nearest first
    pub fn forward_list(&self) -> Vec<BackForwardListItem> {
        unsafe {
            drain_glib_list(
                ffi::webkit_back_forward_list_get_forward_list(self.as_ptr()),
                |item| sink_nullable(item.cast::<WebKitBackForwardListItem>()),
            )
        }
    }
}

impl BackForwardListItem {
    /// URI of the entry
    pub fn uri(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_back_forward_list_item_get_uri(self.as_ptr())) }
    }

    /// Title of the entry
    pub fn title(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_back_forward_list_item_get_title(self.as_ptr())) }
    }

    /// URI originally requested, before any redirects
    pub fn original_uri(&self) -> Option<String> {
        unsafe { from_glib_str(ffi::webkit_back_forward_list_item_get_original_uri(self.as_ptr())) }
    }
}
