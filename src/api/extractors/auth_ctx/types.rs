/// Context attached to a request once the authorization gate has passed.
///
/// - `subject_id` is the identity decoded from the credential's claims; it is
///   never empty here (the claims reader rejects an empty subject)
/// - handlers receive this type only; how it was established is the
///   middleware's business
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub subject_id: String,
}

impl AuthCtx {
    pub fn new(subject_id: String) -> Self {
        Self { subject_id }
    }
}
