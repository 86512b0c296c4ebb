use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use yew::functional::Reducible;

use crate::config;

pub const CONFIRMATION: &str = "Welcome to the collective! Your invitation has been redeemed. We'll contact you within 24 hours to begin your onboarding and arrange your canvas gift.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    InvitationCode,
    ArtistName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::InvitationCode, Field::ArtistName, Field::Email, Field::Phone];

    /// Matches the `id`/`name` attribute of the input.
    pub fn name(self) -> &'static str {
        match self {
            Field::InvitationCode => "invitationCode",
            Field::ArtistName => "artistName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::InvitationCode => "Invitation Code *",
            Field::ArtistName => "Artist Name *",
            Field::Email => "Email *",
            Field::Phone => "Phone Number *",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::InvitationCode | Field::ArtistName => "text",
            Field::Email => "email",
            Field::Phone => "tel",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::InvitationCode => "Enter your unique invitation code",
            Field::ArtistName => "Your full name",
            Field::Email => "your.email@example.com",
            Field::Phone => "(555) 123-4567",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub invitation_code: String,
    pub artist_name: String,
    pub email: String,
    pub phone: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::InvitationCode => &self.invitation_code,
            Field::ArtistName => &self.artist_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::InvitationCode => &mut self.invitation_code,
            Field::ArtistName => &mut self.artist_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Update(Field, String),
    Submit,
    Complete,
}

/// Local state of the "Redeem Your Invitation" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvitationForm {
    pub data: FormData,
    pub submitting: bool,
}

impl InvitationForm {
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.data.get(*f).is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Redeeming Invitation..."
        } else {
            "Redeem Invitation 💌"
        }
    }

    pub fn request(&self) -> RedeemInvitationRequest {
        RedeemInvitationRequest {
            invitation_code: self.data.invitation_code.clone(),
            artist_name: self.data.artist_name.clone(),
            email: self.data.email.clone(),
            phone: self.data.phone.clone(),
        }
    }

    fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Update(field, value) => *self.data.slot(field) = value,
            FormAction::Submit => {
                if self.can_submit() {
                    self.submitting = true;
                }
            }
            FormAction::Complete => *self = Self::default(),
        }
    }
}

impl Reducible for InvitationForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedeemInvitationRequest {
    pub invitation_code: String,
    pub artist_name: String,
    pub email: String,
    pub phone: String,
}

/// Stands in for the redemption API call. Always succeeds after the fixed delay.
pub async fn simulate_redemption(request: RedeemInvitationRequest) {
    match serde_json::to_string(&request) {
        Ok(body) => debug!("Simulating invitation redemption with body {}", body),
        Err(e) => debug!("Could not serialize redemption request: {}", e),
    }
    TimeoutFuture::new(config::REDEEM_DELAY_MS).await;
    info!("Invitation {} redeemed", request.invitation_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InvitationForm {
        let mut form = InvitationForm::default();
        form.apply(FormAction::Update(Field::InvitationCode, "OAB-2025".into()));
        form.apply(FormAction::Update(Field::ArtistName, "Maya Chen".into()));
        form.apply(FormAction::Update(Field::Email, "maya@example.com".into()));
        form.apply(FormAction::Update(Field::Phone, "(555) 123-4567".into()));
        form
    }

    fn reduce(form: InvitationForm, action: FormAction) -> InvitationForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    #[test]
    fn updates_write_the_matching_field() {
        let form = filled();
        assert_eq!(form.data.get(Field::InvitationCode), "OAB-2025");
        assert_eq!(form.data.artist_name, "Maya Chen");
        assert_eq!(form.data.get(Field::Phone), "(555) 123-4567");
        assert!(form.is_complete());
    }

    #[test]
    fn submit_disables_further_submits() {
        let form = reduce(filled(), FormAction::Submit);
        assert!(form.submitting);
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "Redeeming Invitation...");

        let again = reduce(form.clone(), FormAction::Submit);
        assert_eq!(again, form);
    }

    #[test]
    fn completion_clears_every_field() {
        let form = reduce(reduce(filled(), FormAction::Submit), FormAction::Complete);
        assert!(!form.submitting);
        for field in Field::ALL {
            assert_eq!(form.data.get(field), "");
        }
        assert_eq!(form.submit_label(), "Redeem Invitation 💌");
    }

    #[test]
    fn blank_fields_block_submission() {
        for field in Field::ALL {
            let mut form = filled();
            form.apply(FormAction::Update(field, String::new()));
            assert!(!form.can_submit());
            let after = reduce(form.clone(), FormAction::Submit);
            assert!(!after.submitting, "{:?} left blank", field);
        }
    }

    #[test]
    fn whitespace_counts_as_filled() {
        // Same rule as the browser's `required`: only the empty string is missing
        let mut form = filled();
        form.apply(FormAction::Update(Field::Phone, "  ".into()));
        assert!(form.can_submit());
        let after = reduce(form, FormAction::Submit);
        assert!(after.submitting);
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let state = Rc::new(InvitationForm::default());
        let next = state.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn request_serializes_with_form_names() {
        let json = serde_json::to_value(filled().request()).unwrap();
        for field in Field::ALL {
            assert!(json.get(field.name()).is_some(), "missing {}", field.name());
        }
        assert_eq!(json["artistName"], "Maya Chen");
    }
}
