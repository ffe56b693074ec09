//! Wizard step state
//!
//! Ordered named steps with exactly one active. Navigation controls name
//! their target step; no validation gate runs between steps.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    steps: Vec<String>,
    active: usize,
}

impl Wizard {
    /// Build from an ordered step list; the first step starts active.
    pub fn new<S: Into<String>>(steps: impl IntoIterator<Item = S>) -> Result<Self> {
        let steps: Vec<String> = steps.into_iter().map(Into::into).collect();
        if steps.is_empty() {
            return Err(Error::Config("wizard needs at least one step".into()));
        }
        Ok(Self { steps, active: 0 })
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn active_id(&self) -> &str {
        &self.steps[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Jump to the named step. Unknown targets leave the state unchanged.
    pub fn activate(&mut self, id: &str) -> Result<()> {
        match self.steps.iter().position(|s| s == id) {
            Some(index) => {
                self.active = index;
                Ok(())
            }
            None => Err(Error::Config(format!("unknown wizard step: {id}"))),
        }
    }

    /// Progress of the active step as a percentage of the whole.
    pub fn progress_percent(&self) -> f64 {
        (self.active + 1) as f64 / self.steps.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> Wizard {
        Wizard::new(["step-basics", "step-details", "step-images", "step-review"]).unwrap()
    }

    #[test]
    fn test_first_step_active() {
        let w = wizard();
        assert_eq!(w.active_id(), "step-basics");
        assert!(w.is_active("step-basics"));
        assert!(!w.is_active("step-details"));
    }

    #[test]
    fn test_activate_by_id() {
        let mut w = wizard();
        w.activate("step-images").unwrap();
        assert_eq!(w.active_id(), "step-images");
        assert_eq!(w.progress_percent(), 75.0);
    }

    #[test]
    fn test_unknown_step_leaves_state() {
        let mut w = wizard();
        assert!(w.activate("step-payment").is_err());
        assert_eq!(w.active_id(), "step-basics");
    }

    #[test]
    fn test_progress_percent() {
        let mut w = wizard();
        assert_eq!(w.progress_percent(), 25.0);
        w.activate("step-review").unwrap();
        assert_eq!(w.progress_percent(), 100.0);
    }

    #[test]
    fn test_empty_steps_rejected() {
        assert!(Wizard::new(Vec::<String>::new()).is_err());
    }
}
