use log::debug;

use crate::api::RecipeApi;
use crate::error::SubmitError;
use crate::form::{RecipeForm, SubmitOutcome};

/// Moves the host to another page
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// A dismissible container the form may be shown in
pub trait Modal {
    fn close(&mut self);
}

/// Mounts a recipe form in a page or modal and navigates once it is saved
pub struct FormShell<N: Navigator> {
    navigator: N,
    modal: Option<Box<dyn Modal + Send>>,
}

impl<N: Navigator> FormShell<N> {
    /// Form shown as a full page
    pub fn page(navigator: N) -> Self {
        FormShell {
            navigator,
            modal: None,
        }
    }

    /// Form shown inside `modal`, which is closed after a successful submit
    pub fn modal(navigator: N, modal: impl Modal + Send + 'static) -> Self {
        FormShell {
            navigator,
            modal: Some(Box::new(modal)),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Submit `form`; on success go to the new recipe and close the modal.
    ///
    /// On failure nothing is navigated and the modal stays open.
    pub async fn submit(
        &mut self,
        form: &mut RecipeForm,
        api: &dyn RecipeApi,
        user_id: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        let outcome = form.submit(api, user_id).await?;

        let path = outcome.route.path();
        debug!("Navigating to {}", path);
        self.navigator.push(&path);

        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }

        Ok(outcome)
    }
}

/// Navigator that records visited paths
#[derive(Debug, Default, Clone)]
pub struct HistoryNavigator {
    pub history: Vec<String>,
}

impl HistoryNavigator {
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for HistoryNavigator {
    fn push(&mut self, path: &str) {
        self.history.push(path.to_string());
    }
}
