//! Central reaction to an expired session.
//!
//! The enforcing clients clear the session and call [`UnauthorizedInterceptor::fire`];
//! the app registers one hook at startup that navigates to the login page.
//! Clients never navigate themselves.

use std::fmt;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct UnauthorizedInterceptor {
    hook: Option<Rc<dyn Fn()>>,
}

impl UnauthorizedInterceptor {
    pub fn new(hook: impl Fn() + 'static) -> Self {
        Self {
            hook: Some(Rc::new(hook)),
        }
    }

    /// An interceptor that does nothing when fired.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        tracing::debug!("unauthorized response intercepted");
        if let Some(hook) = &self.hook {
            hook();
        }
    }
}

impl fmt::Debug for UnauthorizedInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedInterceptor")
            .field("registered", &self.hook.is_some())
            .finish()
    }
}
