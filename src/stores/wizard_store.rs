//! Wizard store - one onboarding wizard per client view

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::core::{OnboardingForm, StepSequencer};

/// State of one onboarding wizard
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    pub id: Uuid,
    pub sequencer: StepSequencer,
    pub form: OnboardingForm,
    /// Set once the application is accepted; blocks resubmission
    pub submitted: bool,
    /// Last time the wizard was created or changed
    pub last_active: DateTime<Utc>,
}

/// Live wizards by id
pub struct WizardStore {
    wizards: DashMap<Uuid, Wizard>,
}

impl WizardStore {
    pub fn new() -> Self {
        Self {
            wizards: DashMap::new(),
        }
    }

    pub fn create(&self) -> Wizard {
        let wizard = Wizard {
            id: Uuid::new_v4(),
            sequencer: StepSequencer::new(),
            form: OnboardingForm::default(),
            submitted: false,
            last_active: Utc::now(),
        };
        self.wizards.insert(wizard.id, wizard.clone());
        wizard
    }

    pub fn get(&self, id: &Uuid) -> Option<Wizard> {
        self.wizards.get(id).map(|w| w.clone())
    }

    /// Run `f` against a wizard while holding its entry lock
    pub fn update<R>(&self, id: &Uuid, f: impl FnOnce(&mut Wizard) -> R) -> Option<R> {
        self.wizards.get_mut(id).map(|mut w| {
            w.last_active = Utc::now();
            f(&mut *w)
        })
    }

    /// Drop wizards idle for longer than `ttl_secs`, returning how many went
    pub fn purge_stale(&self, ttl_secs: i64) -> usize {
        let cutoff = Utc::now() - Duration::seconds(ttl_secs);
        let before = self.wizards.len();
        self.wizards.retain(|_, w| w.last_active > cutoff);
        before - self.wizards.len()
    }

    pub fn len(&self) -> usize {
        self.wizards.len()
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.wizards.remove(id).is_some()
    }
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizards_are_isolated() {
        let store = WizardStore::new();
        let a = store.create();
        let b = store.create();

        store
            .update(&a.id, |w| {
                w.form.basic.full_name = "A".to_string();
                w.sequencer.advance(&w.form.clone());
            })
            .unwrap();

        assert_eq!(store.get(&a.id).unwrap().sequencer.index(), 1);
        assert_eq!(store.get(&b.id).unwrap().sequencer.index(), 0);
        assert!(store.get(&b.id).unwrap().form.basic.full_name.is_empty());
    }

    #[test]
    fn test_remove() {
        let store = WizardStore::new();
        let w = store.create();
        assert!(store.remove(&w.id));
        assert!(store.get(&w.id).is_none());
        assert!(store.update(&w.id, |_| ()).is_none());
    }

    #[test]
    fn test_purge_stale() {
        let store = WizardStore::new();
        let idle = store.create();
        let active = store.create();

        store
            .update(&idle.id, |w| w.last_active = Utc::now() - Duration::hours(2))
            .unwrap();

        assert_eq!(store.purge_stale(3600), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get(&idle.id).is_none());
        assert!(store.get(&active.id).is_some());
    }
}
