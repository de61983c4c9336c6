//! Runs a portal form inside a component: messages go through
//! [`Form::update`] and the returned effects are carried out here.

use crate::{Route, get_api_client, session::LocalStore};
use portal::session::SessionStore;
use portal::{Effect, Form, Gateway, View};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

struct Driver<F> {
    form: Rc<RefCell<F>>,
    rerender: UseForceUpdateHandle,
    navigator: Option<Navigator>,
}

impl<F> Clone for Driver<F> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            rerender: self.rerender.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl<F: Form + 'static> Driver<F> {
    fn send(&self, msg: F::Msg) {
        let effects = self.form.borrow_mut().update(msg);
        self.rerender.force_update();
        self.execute(effects);
    }

    fn after(&self, effects: Vec<Effect>) {
        if self.form.borrow().is_disposed() {
            return;
        }
        self.rerender.force_update();
        self.execute(effects);
    }

    fn execute(&self, effects: Vec<Effect>) {
        for effect in effects {
            let driver = self.clone();
            match effect {
                Effect::Call { ticket, request } => spawn_local(async move {
                    let reply = get_api_client().call(&request).await;
                    let effects = driver.form.borrow_mut().on_reply(ticket, reply);
                    driver.after(effects);
                }),
                Effect::Wake { ticket, after } => spawn_local(async move {
                    sleep(after).await;
                    let effects = driver.form.borrow_mut().on_wake(ticket);
                    driver.after(effects);
                }),
                Effect::Navigate { view, after } => spawn_local(async move {
                    sleep(after).await;
                    // The user may have left the page in the meantime.
                    if driver.form.borrow().is_disposed() {
                        return;
                    }
                    if let Some(navigator) = &driver.navigator {
                        navigate(navigator, view);
                    }
                }),
                Effect::SaveToken(token) => LocalStore.set_token(&token),
            }
        }
    }
}

async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        gloo_timers::future::sleep(duration).await;
    }
}

fn navigate(navigator: &Navigator, view: View) {
    let route = match view {
        View::Signup => Route::Signup,
        View::Login => Route::Login,
        View::ForgotPassword => Route::ForgotPassword,
        View::Home => Route::Home,
        View::SetPassword(query) => {
            if let Err(e) =
                navigator.push_with_query(&Route::SetPassword, &query)
            {
                tracing::error!("navigation failed: {e}");
            }
            return;
        }
    };
    navigator.push(&route);
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub struct UseFormHandle<F> {
    driver: Driver<F>,
}

impl<F> Clone for UseFormHandle<F> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
        }
    }
}

impl<F: Form + 'static> UseFormHandle<F> {
    pub fn state(&self) -> Ref<'_, F> {
        self.driver.form.borrow()
    }

    /// A callback turning a DOM event into a form message.
    pub fn callback<E: 'static>(
        &self,
        to_msg: impl Fn(E) -> F::Msg + 'static,
    ) -> Callback<E> {
        let driver = self.driver.clone();
        Callback::from(move |event: E| driver.send(to_msg(event)))
    }
}

/// Keep a form alive for the lifetime of the component. The form is disposed
/// on unmount so late replies, timers and navigations are ignored.
#[hook]
pub fn use_form<F, I>(init: I) -> UseFormHandle<F>
where
    F: Form + 'static,
    I: FnOnce() -> F,
{
    let form = use_mut_ref(init);
    let rerender = use_force_update();
    let navigator = use_navigator();

    {
        let form = form.clone();
        use_effect_with((), move |_| move || form.borrow_mut().dispose());
    }

    UseFormHandle {
        driver: Driver {
            form,
            rerender,
            navigator,
        },
    }
}
