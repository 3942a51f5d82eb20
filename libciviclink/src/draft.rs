//! Report draft state machine
//!
//! Owns the in-progress report a citizen composes across the four wizard
//! steps. Forward transitions are guarded by the active step's required
//! fields; backward transitions are always allowed, and backing out of the
//! first step exits the wizard. The draft lives entirely in memory for the
//! duration of one wizard session and is discarded on success or abandon.

use serde::{Deserialize, Serialize};

use crate::types::{Category, PhotoAttachment, Subcategory, MAX_PHOTOS};
use crate::validation::{is_valid_description, MAX_DESCRIPTION_LEN};

/// Wizard position, including the two submission phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    Location,
    Category,
    Description,
    Photos,
    Submitting,
    Success,
}

/// Result of a back action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Moved to the previous step
    MovedBack,
    /// Already on the first step; the caller should leave the wizard
    ExitWizard,
    /// Back is not available in the current state
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub location: String,
    pub landmark: String,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub description: String,
    pub photos: Vec<PhotoAttachment>,
    state: WizardState,
}

impl ReportDraft {
    pub fn new() -> Self {
        Self {
            location: String::new(),
            landmark: String::new(),
            category: None,
            subcategory: None,
            description: String::new(),
            photos: Vec::new(),
            state: WizardState::Location,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// 1-based step number for the progress indicator
    pub fn step_number(&self) -> u8 {
        match self.state {
            WizardState::Location => 1,
            WizardState::Category => 2,
            WizardState::Description => 3,
            WizardState::Photos | WizardState::Submitting | WizardState::Success => 4,
        }
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_landmark(&mut self, landmark: impl Into<String>) {
        self.landmark = landmark.into();
    }

    /// Select a category. Switching away from the current category clears
    /// any previously chosen subcategory so a stale one can never survive.
    pub fn select_category(&mut self, category: Category) {
        if self.category != Some(category) {
            self.subcategory = None;
        }
        self.category = Some(category);
    }

    /// Select a subcategory. Rejected unless it belongs to the currently
    /// selected category.
    pub fn select_subcategory(&mut self, subcategory: Subcategory) -> bool {
        if self.category == Some(subcategory.category()) {
            self.subcategory = Some(subcategory);
            true
        } else {
            false
        }
    }

    /// Replace the description, truncating to the hard cap.
    ///
    /// The cap counts characters, not bytes, and is enforced here rather
    /// than at validation so no input sequence can exceed it.
    pub fn set_description(&mut self, text: &str) {
        if text.chars().count() > MAX_DESCRIPTION_LEN {
            self.description = text.chars().take(MAX_DESCRIPTION_LEN).collect();
        } else {
            self.description = text.to_string();
        }
    }

    /// Add a photo slot; at most four are kept.
    pub fn add_photo(&mut self, photo: PhotoAttachment) -> bool {
        if self.photos.len() >= MAX_PHOTOS {
            return false;
        }
        self.photos.push(photo);
        true
    }

    pub fn remove_photo(&mut self, index: usize) -> Option<PhotoAttachment> {
        if index < self.photos.len() {
            Some(self.photos.remove(index))
        } else {
            None
        }
    }

    /// Whether the active step's guard is satisfied.
    ///
    /// Drives the Next control's enabled state. The photos step has no
    /// guard; submission phases never advance.
    pub fn can_advance(&self) -> bool {
        match self.state {
            WizardState::Location => !self.landmark.trim().is_empty(),
            WizardState::Category => self.subcategory.is_some(),
            WizardState::Description => is_valid_description(&self.description),
            WizardState::Photos => true,
            WizardState::Submitting | WizardState::Success => false,
        }
    }

    /// Move forward one step when the guard holds. The photos step is the
    /// last editing step; leaving it goes through `begin_submission`.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.state {
            WizardState::Location => self.state = WizardState::Category,
            WizardState::Category => self.state = WizardState::Description,
            WizardState::Description => self.state = WizardState::Photos,
            _ => return false,
        }
        true
    }

    /// Move backward one step. Always allowed while editing; on the first
    /// step the caller should exit the wizard instead.
    pub fn back(&mut self) -> BackOutcome {
        match self.state {
            WizardState::Location => BackOutcome::ExitWizard,
            WizardState::Category => {
                self.state = WizardState::Location;
                BackOutcome::MovedBack
            }
            WizardState::Description => {
                self.state = WizardState::Category;
                BackOutcome::MovedBack
            }
            WizardState::Photos => {
                self.state = WizardState::Description;
                BackOutcome::MovedBack
            }
            WizardState::Submitting | WizardState::Success => BackOutcome::Ignored,
        }
    }

    /// Enter the submitting phase. Only valid from the photos step, and a
    /// no-op while a submission is already in flight, so repeated submit
    /// triggers cannot start a second submission.
    pub fn begin_submission(&mut self) -> bool {
        if self.state == WizardState::Photos {
            self.state = WizardState::Submitting;
            true
        } else {
            false
        }
    }

    /// Submission succeeded; show the success phase.
    pub fn complete_submission(&mut self) -> bool {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Success;
            true
        } else {
            false
        }
    }

    /// Submission failed; return to the photos step with every field
    /// preserved so the citizen can retry.
    pub fn fail_submission(&mut self) -> bool {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Photos;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// All step guards satisfied; the submission pipeline's precondition.
    pub fn is_complete(&self) -> bool {
        !self.landmark.trim().is_empty()
            && self.subcategory.is_some()
            && is_valid_description(&self.description)
    }
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self::new()
    }
}
