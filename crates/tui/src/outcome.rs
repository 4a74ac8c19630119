use atlas_countries::Country;

/// Result of a finished picker session.
#[derive(Debug, Clone)]
pub struct PickOutcome {
	/// Whether the session ended with a confirmation rather than a cancel.
	pub accepted: bool,
	/// The country confirmed by the user, if any.
	pub selection: Option<Country>,
	/// Query text at the moment the session ended.
	pub query: String,
}

impl PickOutcome {
	/// The chosen country for an accepted session, `None` after a cancel.
	#[must_use]
	pub fn selected(&self) -> Option<&Country> {
		if self.accepted { self.selection.as_ref() } else { None }
	}
}
