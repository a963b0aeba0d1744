//! Application controller: strategy in, campaign out.
//!
//! The controller owns the displayed campaign and the history store. Remote
//! calls never run while the controller is borrowed: every transition that
//! needs the service is split into a `begin_*` step that hands out a ticket
//! and a `complete_*` step that commits the outcome. [`Controller::submit`]
//! and [`Controller::regenerate_image`] chain both halves for synchronous
//! callers.
//!
//! Each committed submit, reset or history load starts a new display epoch.
//! A regeneration ticket from an older epoch is discarded on completion so
//! a late image never lands on a different campaign.

use crate::clipboard::{share_text, Clipboard, CopiedFlag};
use crate::history::{HistoryStore, Storage};
use crate::service::ContentService;
use crate::{now_millis, CampaignRecord, Content, Error, Result, Strategy, MAX_POSTERS};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::time::Instant;

/// Where the controller is in the generation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No campaign yet, form shown
    Idle,
    /// Full generation in flight
    Generating,
    /// Campaign available for display
    Ready,
    /// Ready, with this poster slot being replaced
    RegeneratingOne(usize),
}

/// Whether the history overlay is shown; orthogonal to [`Stage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    History,
}

/// Output of a full generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub content: Content,
    /// 0..=2 non-empty image URLs
    pub posters: Vec<String>,
}

/// Run the full pipeline: copy, then two backgrounds, sequentially.
///
/// The first error aborts the run. Backgrounds that come back without an
/// image are dropped from the poster list.
pub fn generate_campaign<C: ContentService + ?Sized>(service: &C, strategy: &Strategy) -> Result<Generated> {
    let content = service.generate_copy(strategy)?;
    let mut posters = Vec::with_capacity(MAX_POSTERS);
    for variant in 0..MAX_POSTERS {
        match service.generate_background(strategy)? {
            Some(url) if !url.is_empty() => posters.push(url),
            _ => warn!("Background variant {} produced no image", variant + 1),
        }
    }
    Ok(Generated { content, posters })
}

/// Outstanding full submission
#[derive(Debug)]
pub struct SubmitTicket {
    strategy: Strategy,
}

impl SubmitTicket {
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

/// Outstanding single-poster regeneration
#[derive(Debug)]
pub struct RegenTicket {
    index: usize,
    epoch: u64,
    strategy: Strategy,
}

impl RegenTicket {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

#[derive(Debug, Clone)]
struct Current {
    strategy: Strategy,
    content: Content,
    posters: Vec<String>,
}

pub struct Controller<S: Storage> {
    current: Option<Current>,
    submitting: bool,
    regenerating: BTreeSet<usize>,
    epoch: u64,
    view: View,
    copied: CopiedFlag,
    history: HistoryStore<S>,
}

impl<S: Storage> Controller<S> {
    /// Start idle with history loaded from `storage`.
    pub fn new(storage: S) -> Self {
        Self::with_history(HistoryStore::open(storage))
    }

    pub fn with_history(history: HistoryStore<S>) -> Self {
        Self {
            current: None,
            submitting: false,
            regenerating: BTreeSet::new(),
            epoch: 0,
            view: View::Main,
            copied: CopiedFlag::default(),
            history,
        }
    }

    pub fn stage(&self) -> Stage {
        if self.submitting {
            return Stage::Generating;
        }
        match (&self.current, self.regenerating.iter().next()) {
            (None, _) => Stage::Idle,
            (Some(_), Some(&slot)) => Stage::RegeneratingOne(slot),
            (Some(_), None) => Stage::Ready,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn toggle_history(&mut self) -> View {
        self.view = match self.view {
            View::Main => View::History,
            View::History => View::Main,
        };
        self.view
    }

    pub fn show_history(&mut self, show: bool) {
        self.view = if show { View::History } else { View::Main };
    }

    pub fn strategy(&self) -> Option<&Strategy> {
        self.current.as_ref().map(|c| &c.strategy)
    }

    pub fn content(&self) -> Option<&Content> {
        self.current.as_ref().map(|c| &c.content)
    }

    pub fn posters(&self) -> &[String] {
        self.current.as_ref().map(|c| c.posters.as_slice()).unwrap_or(&[])
    }

    pub fn history(&self) -> &[CampaignRecord] {
        self.history.records()
    }

    pub fn history_store(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn is_regenerating(&self, index: usize) -> bool {
        self.regenerating.contains(&index)
    }

    fn next_epoch(&mut self) {
        self.epoch += 1;
        self.regenerating.clear();
    }

    /// Enter `Generating`. Only one submission may be in flight.
    pub fn begin_submit(&mut self, strategy: Strategy) -> Result<SubmitTicket> {
        if self.submitting {
            return Err(Error::InvalidState("a generation is already in progress".into()));
        }
        debug!("Submitting strategy: {} / {} / {}", strategy.goal, strategy.audience, strategy.style);
        self.submitting = true;
        Ok(SubmitTicket { strategy })
    }

    /// Commit or abandon a submission. On failure nothing changes except
    /// leaving `Generating`, and the error is returned as `Generation`.
    pub fn complete_submit(&mut self, ticket: SubmitTicket, outcome: Result<Generated>) -> Result<()> {
        self.submitting = false;
        let generated = match outcome {
            Ok(g) => g,
            Err(Error::Generation(msg)) => return Err(Error::Generation(msg)),
            Err(e) => return Err(Error::Generation(e.to_string())),
        };

        let stamp = self.history.next_timestamp(now_millis());
        let record = CampaignRecord::new(stamp, &ticket.strategy, &generated.content, &generated.posters);
        info!(
            "Generated campaign {} with {} poster(s)",
            record.id,
            generated.posters.len()
        );

        self.current = Some(Current {
            strategy: ticket.strategy,
            content: generated.content,
            posters: generated.posters,
        });
        self.next_epoch();
        self.copied.clear();
        self.view = View::Main;
        self.history.append(record);
        Ok(())
    }

    /// Mark poster `index` as regenerating. Other slots stay available.
    pub fn begin_regenerate(&mut self, index: usize) -> Result<RegenTicket> {
        let current = self
            .current
            .as_ref()
            .ok_or_else(|| Error::InvalidState("no campaign to regenerate".into()))?;
        if index >= current.posters.len() {
            return Err(Error::InvalidState(format!(
                "poster {} does not exist ({} available)",
                index,
                current.posters.len()
            )));
        }
        if !self.regenerating.insert(index) {
            return Err(Error::InvalidState(format!("poster {} is already regenerating", index)));
        }
        debug!("Regenerating poster {}", index);
        Ok(RegenTicket {
            index,
            epoch: self.epoch,
            strategy: current.strategy.clone(),
        })
    }

    /// Apply a regeneration outcome. Returns `Ok(true)` when the poster was
    /// replaced and `Ok(false)` when the ticket belonged to an earlier
    /// campaign. A missing image or a failed call leaves the poster as it
    /// was and returns `Regeneration`.
    pub fn complete_regenerate(&mut self, ticket: RegenTicket, outcome: Result<Option<String>>) -> Result<bool> {
        if ticket.epoch != self.epoch {
            debug!("Discarding poster {} regenerated for a previous campaign", ticket.index);
            return Ok(false);
        }
        self.regenerating.remove(&ticket.index);

        let url = match outcome {
            Ok(Some(url)) if !url.is_empty() => url,
            Ok(_) => return Err(Error::Regeneration("no image was produced".into())),
            Err(e) => return Err(Error::Regeneration(e.to_string())),
        };
        match self.current.as_mut().and_then(|c| c.posters.get_mut(ticket.index)) {
            Some(slot) => {
                *slot = url;
                Ok(true)
            }
            None => Err(Error::Regeneration(format!("poster {} no longer exists", ticket.index))),
        }
    }

    /// Full generation against `service`.
    pub fn submit<C: ContentService + ?Sized>(&mut self, service: &C, strategy: Strategy) -> Result<()> {
        let ticket = self.begin_submit(strategy)?;
        let outcome = generate_campaign(service, ticket.strategy());
        self.complete_submit(ticket, outcome)
    }

    /// Regenerate one poster background against `service`.
    pub fn regenerate_image<C: ContentService + ?Sized>(&mut self, service: &C, index: usize) -> Result<bool> {
        let ticket = self.begin_regenerate(index)?;
        let outcome = service.generate_background(ticket.strategy());
        self.complete_regenerate(ticket, outcome)
    }

    /// Back to `Idle`. History is untouched.
    pub fn reset(&mut self) {
        self.current = None;
        self.next_epoch();
        self.copied.clear();
        self.view = View::Main;
    }

    /// Display a stored campaign without any remote call.
    pub fn load_from_history(&mut self, id: &str) -> Result<()> {
        let record = self
            .history
            .find(id)
            .cloned()
            .ok_or_else(|| Error::InvalidState(format!("no campaign with id {}", id)))?;
        self.load_record(record);
        Ok(())
    }

    pub fn load_record(&mut self, record: CampaignRecord) {
        debug!("Loading campaign {} from history", record.id);
        self.current = Some(Current {
            strategy: record.strategy,
            content: record.result,
            posters: record.posters,
        });
        self.next_epoch();
        self.view = View::Main;
    }

    /// Copy the social post. Success lights the "copied" indicator.
    pub fn copy_share_text(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<String> {
        let content = self
            .content()
            .ok_or_else(|| Error::InvalidState("nothing to copy".into()))?;
        let text = share_text(content);
        clipboard.write_text(&text)?;
        self.copied.set(now);
        Ok(text)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied.is_set(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryStorage;
    use crate::{Audience, Goal, SocialPost, VisualStyle};

    fn strategy() -> Strategy {
        Strategy {
            goal: Goal::NewProductLaunch,
            audience: Audience::Student,
            keywords: vec!["eco bottle".into()],
            promo_mechanism: "buy one get one".into(),
            style: VisualStyle::Vibrant,
            product_image: None,
            scene_preference: None,
        }
    }

    fn generated() -> Generated {
        Generated {
            content: Content {
                social_post: SocialPost {
                    title: "t".into(),
                    description: "d".into(),
                    solution: "s".into(),
                    cta: "c".into(),
                    hashtags: vec!["x".into()],
                },
                slogan: "slogan".into(),
                promo_tagline: "tag".into(),
                data_viz_value: None,
            },
            posters: vec!["data:image/png;base64,AA==".into(), "data:image/png;base64,BB==".into()],
        }
    }

    #[test]
    fn stage_follows_two_phase_submit() {
        let mut c = Controller::new(MemoryStorage::new());
        assert_eq!(c.stage(), Stage::Idle);
        let t = c.begin_submit(strategy()).unwrap();
        assert_eq!(c.stage(), Stage::Generating);
        assert!(matches!(c.begin_submit(strategy()), Err(Error::InvalidState(_))));
        c.complete_submit(t, Ok(generated())).unwrap();
        assert_eq!(c.stage(), Stage::Ready);
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn failed_submit_returns_to_previous_stage() {
        let mut c = Controller::new(MemoryStorage::new());
        let t = c.begin_submit(strategy()).unwrap();
        let err = c.complete_submit(t, Err(Error::Network("down".into()))).unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
        assert_eq!(c.stage(), Stage::Idle);
        assert!(c.history().is_empty());
    }

    #[test]
    fn stale_regeneration_is_discarded_after_resubmit() {
        let mut c = Controller::new(MemoryStorage::new());
        let t = c.begin_submit(strategy()).unwrap();
        c.complete_submit(t, Ok(generated())).unwrap();

        let regen = c.begin_regenerate(0).unwrap();
        assert_eq!(c.stage(), Stage::RegeneratingOne(0));
        assert!(c.begin_regenerate(0).is_err());
        let other = c.begin_regenerate(1).unwrap();

        let t = c.begin_submit(strategy()).unwrap();
        let mut next = generated();
        next.posters = vec!["data:image/png;base64,NEW=".into()];
        c.complete_submit(t, Ok(next)).unwrap();

        let applied = c
            .complete_regenerate(regen, Ok(Some("data:image/png;base64,LATE".into())))
            .unwrap();
        assert!(!applied);
        assert!(!c.complete_regenerate(other, Ok(None)).unwrap());
        assert_eq!(c.posters(), &["data:image/png;base64,NEW=".to_string()]);
        assert_eq!(c.stage(), Stage::Ready);
    }

    #[test]
    fn history_view_is_orthogonal_to_stage() {
        let mut c = Controller::new(MemoryStorage::new());
        assert_eq!(c.toggle_history(), View::History);
        assert_eq!(c.stage(), Stage::Idle);
        let t = c.begin_submit(strategy()).unwrap();
        c.complete_submit(t, Ok(generated())).unwrap();
        assert_eq!(c.view(), View::Main);
    }
}
