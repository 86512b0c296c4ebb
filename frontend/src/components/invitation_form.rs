use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::invitation::{simulate_redemption, Field, FormAction, InvitationForm, CONFIRMATION};

#[function_component(InvitationFormPanel)]
pub fn invitation_form_panel() -> Html {
    let form = use_reducer(InvitationForm::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit() {
                return;
            }
            info!("Redeeming invitation");
            let request = form.request();
            let dispatcher = form.dispatcher();
            dispatcher.dispatch(FormAction::Submit);

            wasm_bindgen_futures::spawn_local(async move {
                simulate_redemption(request).await;
                match web_sys::window() {
                    Some(window) => {
                        let _ = window.alert_with_message(CONFIRMATION);
                    }
                    None => warn!("No window to show the redemption confirmation"),
                }
                dispatcher.dispatch(FormAction::Complete);
            });
        })
    };

    html! {
        <form class="application-form" {onsubmit}>
            <h2 class="form-title">{"Redeem Your Invitation"}</h2>
            <p class="form-intro">
                {"Have an invitation code? Enter your details below to claim your canvas gift and begin your onboarding into the collective."}
            </p>

            <div class="form-grid">
                { for Field::ALL.iter().map(|field| {
                    let field = *field;
                    let oninput = {
                        let dispatcher = form.dispatcher();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            dispatcher.dispatch(FormAction::Update(field, input.value()));
                        })
                    };
                    html! {
                        <div class="form-field" key={field.name()}>
                            <label class="form-label" for={field.name()}>{field.label()}</label>
                            <input
                                class="form-input"
                                type={field.input_type()}
                                id={field.name()}
                                name={field.name()}
                                value={form.data.get(field).to_string()}
                                placeholder={field.placeholder()}
                                required={true}
                                {oninput}
                            />
                        </div>
                    }
                }) }
            </div>

            <button class="submit-button" type="submit" disabled={form.submitting}>
                {form.submit_label()}
            </button>
        </form>
    }
}
