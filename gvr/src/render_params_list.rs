use crate::context::Context;
use crate::gvr_error::GvrError;
use crate::runtime::GvrRuntime;
use gvr_api::ffi::gvr_render_params_list;
use gvr_api::{Eye, RenderParams};
use std::ptr::NonNull;

/// Owned handle to a runtime-managed list of [`RenderParams`].
///
/// The list cannot outlive the context it was created from.
pub struct RenderParamsList<'a, R: GvrRuntime> {
    context: &'a Context<R>,
    list: NonNull<gvr_render_params_list>,
}

impl<'a, R: GvrRuntime> RenderParamsList<'a, R> {
    pub(crate) fn new(context: &'a Context<R>) -> Result<Self, GvrError> {
        let list = unsafe { context.runtime().create_render_params_list(context.as_ptr()) };
        match list {
            Some(list) => Ok(RenderParamsList {
                context: context,
                list: list,
            }),
            None => {
                warn!("VR runtime refused to create a render params list");
                Err(GvrError::RenderParamsListCreation)
            }
        }
    }

    pub fn as_ptr(&self) -> NonNull<gvr_render_params_list> {
        self.list
    }

    pub fn len(&self) -> usize {
        unsafe { self.context.runtime().render_params_list_len(self.list) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<RenderParams, GvrError> {
        let len = self.len();
        if index >= len {
            return Err(GvrError::IndexOutOfRange { index: index, len: len });
        }
        Ok(unsafe { self.context.runtime().render_params_list_get(self.list, index) })
    }

    /// Replaces the entry at `index`. `index == len()` appends.
    pub fn set(&mut self, index: usize, params: &RenderParams) -> Result<(), GvrError> {
        let len = self.len();
        if index > len {
            return Err(GvrError::IndexOutOfRange { index: index, len: len });
        }
        unsafe { self.context.runtime().render_params_list_set(self.list, index, params) };
        Ok(())
    }

    pub fn push(&mut self, params: &RenderParams) {
        let len = self.len();
        unsafe { self.context.runtime().render_params_list_set(self.list, len, params) };
    }

    /// First entry rendered for `eye`, if any.
    pub fn for_eye(&self, eye: Eye) -> Option<RenderParams> {
        self.to_vec().into_iter().find(|p| p.eye_type == eye)
    }

    pub fn to_vec(&self) -> Vec<RenderParams> {
        (0..self.len())
            .map(|i| unsafe { self.context.runtime().render_params_list_get(self.list, i) })
            .collect()
    }
}

impl<'a, R: GvrRuntime> Drop for RenderParamsList<'a, R> {
    fn drop(&mut self) {
        unsafe {
            self.context.runtime().destroy_render_params_list(self.list);
        }
    }
}
