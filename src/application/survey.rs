//! SurveySession - application service tying the engine together.
//!
//! Owns the wizard, recomputes the estimate on demand (it is cheap and
//! pure), and manages the reveal animation lifecycle: started when the
//! wizard enters the results view, cancelled when it leaves, restarted
//! from zero on re-entry.

use tracing::debug;

use crate::domain::estimate::{EstimateResult, SavingsCalculator};
use crate::domain::foundation::{DomainError, Percentage, PracticeOption, TeamSize};
use crate::domain::messaging::reveal_message;
use crate::domain::pricing::PricingTable;
use crate::domain::wizard::{Wizard, WizardStep};

use super::reveal::{RevealAnimation, RevealConfig, RevealFrame};

/// One prospect's pass through the survey.
pub struct SurveySession {
    wizard: Wizard,
    pricing: PricingTable,
    reveal_config: RevealConfig,
    reveal: Option<RevealAnimation>,
}

impl SurveySession {
    /// Starts a session with explicit pricing and reveal timing.
    pub fn new(team_size: TeamSize, pricing: PricingTable, reveal_config: RevealConfig) -> Self {
        Self {
            wizard: Wizard::new(team_size),
            pricing,
            reveal_config,
            reveal: None,
        }
    }

    /// Starts a session with default pricing and reveal timing.
    pub fn with_defaults(team_size: TeamSize) -> Self {
        Self::new(team_size, PricingTable::default(), RevealConfig::default())
    }

    /// Returns the current wizard step.
    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    /// Returns survey progress for the progress bar.
    pub fn progress(&self) -> Percentage {
        self.wizard.progress()
    }

    /// Returns the pricing table in effect.
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Updates the team size (clamped at the boundary).
    pub fn set_team_size(&mut self, raw: u32) {
        self.wizard.set_team_size(TeamSize::new(raw));
    }

    /// Records an answer and returns the reveal copy to show for it
    /// (`None` for baseline answers). The step pointer does not move.
    pub fn answer(&mut self, option: PracticeOption) -> Result<Option<&'static str>, DomainError> {
        self.wizard.set_answer(option);
        reveal_message(option.category(), option)
    }

    /// Advances the wizard. Entering the results view computes the final
    /// estimate and starts the reveal animation.
    ///
    /// Returns true if the step changed.
    pub fn next(&mut self) -> Result<bool, DomainError> {
        let moved = self.wizard.next();
        if moved && self.wizard.step().is_results() {
            let result = self.estimate()?;
            debug!(verdict = ?result.verdict(), "entering results view");
            self.reveal = Some(RevealAnimation::start(result, self.reveal_config.clone()));
        }
        Ok(moved)
    }

    /// Steps back. Leaving the results view cancels the animation so no
    /// frame can land in a torn-down view.
    pub fn back(&mut self) -> bool {
        let leaving_results = self.wizard.step().is_results();
        let moved = self.wizard.back();
        if moved && leaving_results {
            if let Some(animation) = self.reveal.take() {
                animation.cancel();
            }
        }
        moved
    }

    /// The live (possibly partial) estimate for the preview pane.
    pub fn estimate(&self) -> Result<EstimateResult, DomainError> {
        SavingsCalculator::aggregate(self.wizard.selection(), &self.pricing)
    }

    /// The latest animation frame, if the results view is active.
    pub fn reveal_frame(&self) -> Option<RevealFrame> {
        self.reveal.as_ref().map(RevealAnimation::frame)
    }

    /// Waits for the animation to publish its exact final frame.
    pub async fn settled_frame(&mut self) -> Option<RevealFrame> {
        match self.reveal.as_mut() {
            Some(animation) => animation.settled().await,
            None => None,
        }
    }

    /// Returns a receiver of animation frames for rendering.
    pub fn subscribe_reveal(&self) -> Option<tokio::sync::watch::Receiver<RevealFrame>> {
        self.reveal.as_ref().map(RevealAnimation::subscribe)
    }

    /// Whether to suggest the email-capture prompt: only meaningful on
    /// the results view, and only when annual savings clear the
    /// configured threshold.
    pub fn should_prompt_capture(&self) -> Result<bool, DomainError> {
        if !self.wizard.step().is_results() {
            return Ok(false);
        }
        let result = self.estimate()?;
        Ok(result.should_prompt_capture(self.pricing.capture_threshold_annual))
    }

    /// Discards every answer, cancels any animation, and restarts.
    pub fn reset(&mut self) {
        if let Some(animation) = self.reveal.take() {
            animation.cancel();
        }
        self.wizard.reset();
    }
}
