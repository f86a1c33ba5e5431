//! # Quote Session
//!
//! One visitor's interaction with the quote widget.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Page Action              Session Method            State Change        │
//! │  ───────────              ──────────────            ────────────        │
//! │                                                                         │
//! │  Pick product ──────────► select_product() ───────► selected_product_id │
//! │                                                                         │
//! │  Pick option ───────────► select_color() etc. ────► selected_*          │
//! │                                                                         │
//! │  Type / slide qty ──────► set_quantity() ─────────► quantity (clamped)  │
//! │                                                                         │
//! │  +/- buttons ───────────► increment/decrement ────► quantity ± step     │
//! │                                                                         │
//! │  Add decoration ────────► toggle_embellishment() ─► embellishments      │
//! │                                                                         │
//! │  Email / Design ────────► submit() ───────────────► (events only)       │
//! │                                                                         │
//! │  After every mutation: compute_quote() → calculation → Change event    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events queue up in an outbox; the host drains them with
//! [`QuoteSession::drain_events`] and re-dispatches them as DOM events.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use quote_core::{
    compute_quote, Embellishment, EmbellishmentDetails, EmbellishmentKind, Product,
    QuoteCalculation, QuoteConfig, SelectionState,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{WidgetError, WidgetResult};
use crate::payload::{
    render_email_subject, FormFields, QuoteEvent, QuotePayload, QuoteSubmission, Readouts,
    SubmitAction, SubmitOutcome,
};

// =============================================================================
// Clock
// =============================================================================

/// Source of "now" for payload timestamps and "today" for delivery dates.
///
/// Both variants read "today" in the viewer's own offset, so a fixed clock
/// reproduces what a visitor in that timezone would see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Wall clock; "today" is the calendar date in the local timezone.
    #[default]
    System,
    /// Frozen instant; "today" is the calendar date at its offset.
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    /// Current instant, always in UTC.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => at.with_timezone(&Utc),
        }
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(at) => at.date_naive(),
        }
    }
}

// =============================================================================
// Embellishment Edits
// =============================================================================

/// A single detail-field edit on an embellishment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbellishmentField {
    SpColors(String),
    SpSize(String),
    SpExtras(String),
    EmbColors(String),
    EmbArea(String),
    Emb3d(bool),
}

impl EmbellishmentField {
    fn apply(self, details: &mut EmbellishmentDetails) {
        match self {
            EmbellishmentField::SpColors(v) => details.sp_colors = Some(v),
            EmbellishmentField::SpSize(v) => details.sp_size = Some(v),
            EmbellishmentField::SpExtras(v) => details.sp_extras = Some(v),
            EmbellishmentField::EmbColors(v) => details.emb_colors = Some(v),
            EmbellishmentField::EmbArea(v) => details.emb_area = Some(v),
            EmbellishmentField::Emb3d(v) => details.emb_3d = Some(v),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Selection state plus the latest quote for one widget instance.
///
/// ## Invariants
/// - `calculation` always reflects the current `state`
/// - `state.quantity` stays within the catalog limits once set through
///   the quantity methods
#[derive(Debug)]
pub struct QuoteSession {
    config: Arc<QuoteConfig>,
    state: SelectionState,
    calculation: QuoteCalculation,
    clock: Clock,
    events: Vec<QuoteEvent>,
}

impl QuoteSession {
    /// Creates a session with the first product and option of each kind
    /// preselected and the minimum quantity.
    ///
    /// The initial quote is queued as a Change event when a product resolves.
    pub fn new(config: Arc<QuoteConfig>, clock: Clock) -> Self {
        let mut state = SelectionState {
            quantity: config.limits.min_qty,
            ..SelectionState::default()
        };
        apply_default_selection(&config, &mut state);

        let mut session = QuoteSession {
            calculation: QuoteCalculation::degenerate(clock.today()),
            config,
            state,
            clock,
            events: Vec::new(),
        };
        session.recalculate();

        debug!(product = %session.state.selected_product_id, "Quote session created");
        session
    }

    /// Swaps in a new catalog.
    ///
    /// Product and option selections reset to the catalog's first entries.
    /// Quantity is clamped to the new limits; embellishments are kept.
    /// Queues a Change event like any other mutation.
    pub fn set_config(&mut self, config: Arc<QuoteConfig>) {
        apply_default_selection(&config, &mut self.state);
        self.state.quantity = config.limits.clamp(i64::from(self.state.quantity));
        self.config = config;

        info!(
            products = self.config.products.len(),
            product = %self.state.selected_product_id,
            quantity = self.state.quantity,
            "Quote session reconfigured"
        );
        self.recalculate();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn calculation(&self) -> &QuoteCalculation {
        &self.calculation
    }

    /// The selected product, if its id resolves.
    pub fn product(&self) -> Option<&Product> {
        self.config.product(&self.state.selected_product_id)
    }

    pub fn readouts(&self) -> Readouts {
        Readouts::new(self.state.quantity, &self.calculation, &self.config.currency)
    }

    pub fn form_fields(&self) -> FormFields {
        FormFields::new(&self.state, &self.calculation, self.product())
    }

    /// The change payload for the current state, if a product is selected.
    pub fn payload(&self) -> Option<QuotePayload> {
        let product = self.product()?;
        Some(QuotePayload::new(
            &self.state,
            &self.calculation,
            product,
            &self.config.currency,
            self.clock.now(),
        ))
    }

    /// Email subject with the product name filled in.
    ///
    /// `None` without a subject template or a selected product.
    pub fn email_subject(&self) -> Option<String> {
        let template = self.config.cta.email_subject.as_deref()?;
        let product = self.product()?;
        Some(render_email_subject(template, &product.name))
    }

    /// Takes all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<QuoteEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects a product. Unknown ids are kept and quote as zero.
    pub fn select_product(&mut self, id: impl Into<String>) {
        self.state.selected_product_id = id.into();
        debug!(product = %self.state.selected_product_id, "Product selected");
        self.recalculate();
    }

    pub fn select_color(&mut self, id: impl Into<String>) {
        self.state.selected_color = id.into();
        debug!(color = %self.state.selected_color, "Color selected");
        self.recalculate();
    }

    pub fn select_artwork(&mut self, id: impl Into<String>) {
        self.state.selected_artwork = id.into();
        debug!(artwork = %self.state.selected_artwork, "Artwork selected");
        self.recalculate();
    }

    pub fn select_neck_label(&mut self, id: impl Into<String>) {
        self.state.selected_neck_label = id.into();
        debug!(neck_label = %self.state.selected_neck_label, "Neck label selected");
        self.recalculate();
    }

    // =========================================================================
    // Quantity
    // =========================================================================

    /// Sets the quantity from raw input, clamped to the catalog limits.
    ///
    /// Returns the quantity actually stored.
    pub fn set_quantity(&mut self, qty: i64) -> u32 {
        let clamped = self.config.limits.clamp(qty);
        if i64::from(clamped) != qty {
            debug!(requested = qty, clamped, "Quantity clamped to limits");
        }
        self.state.quantity = clamped;
        debug!(quantity = clamped, "Quantity updated");
        self.recalculate();
        clamped
    }

    /// Adds one step, stopping at the maximum.
    pub fn increment_quantity(&mut self) -> u32 {
        let step = i64::from(self.config.limits.step());
        self.set_quantity(i64::from(self.state.quantity) + step)
    }

    /// Removes one step, stopping at the minimum.
    pub fn decrement_quantity(&mut self) -> u32 {
        let step = i64::from(self.config.limits.step());
        self.set_quantity(i64::from(self.state.quantity) - step)
    }

    // =========================================================================
    // Embellishments
    // =========================================================================

    /// Adds an expanded embellishment of `kind`, or collapses/expands the
    /// existing one.
    pub fn toggle_embellishment(&mut self, kind: EmbellishmentKind) {
        let items = &mut self.state.embellishments;
        if let Some(existing) = items.iter_mut().find(|e| e.kind == kind) {
            existing.is_expanded = !existing.is_expanded;
            debug!(kind = kind.as_str(), expanded = existing.is_expanded, "Embellishment toggled");
        } else {
            let id = format!("{}-{}", kind.as_str(), Uuid::new_v4().simple());
            debug!(kind = kind.as_str(), id = %id, "Embellishment added");
            items.push(Embellishment {
                id,
                kind,
                is_expanded: true,
                details: EmbellishmentDetails::default(),
            });
        }
        self.recalculate();
    }

    /// Removes the embellishment row at `index` and returns it.
    pub fn remove_embellishment(&mut self, index: usize) -> WidgetResult<Embellishment> {
        if index >= self.state.embellishments.len() {
            return Err(WidgetError::EmbellishmentNotFound { index });
        }
        let removed = self.state.embellishments.remove(index);
        debug!(index, id = %removed.id, "Embellishment removed");
        self.recalculate();
        Ok(removed)
    }

    pub fn update_embellishment(
        &mut self,
        index: usize,
        field: EmbellishmentField,
    ) -> WidgetResult<()> {
        let item = self
            .state
            .embellishments
            .get_mut(index)
            .ok_or(WidgetError::EmbellishmentNotFound { index })?;

        debug!(index, field = ?field, "Embellishment updated");
        field.apply(&mut item.details);
        self.recalculate();
        Ok(())
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Queues a submit event and tells the host what to do next.
    ///
    /// ## Errors
    /// [`WidgetError::NoProductSelected`] when the product id doesn't resolve;
    /// no event is queued in that case.
    pub fn submit(&mut self, action: SubmitAction) -> WidgetResult<SubmitOutcome> {
        let payload = self.payload().ok_or(WidgetError::NoProductSelected)?;

        info!(
            action = ?action,
            product = %self.state.selected_product_id,
            quantity = self.state.quantity,
            subtotal = %self.calculation.subtotal,
            "Quote submitted"
        );

        self.events
            .push(QuoteEvent::Submit(QuoteSubmission { payload, action }));

        let outcome = match action {
            SubmitAction::Email => SubmitOutcome::SubmitForm,
            SubmitAction::Design => match &self.config.cta.start_design_url {
                Some(url) => SubmitOutcome::OpenUrl(url.clone()),
                None => SubmitOutcome::None,
            },
        };
        Ok(outcome)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn recalculate(&mut self) {
        self.calculation = compute_quote(&self.config, &self.state, self.clock.today());

        // No product, no event
        if let Some(payload) = self.payload() {
            self.events.push(QuoteEvent::Change(payload));
        }
    }
}

/// Points every selection at the first entry the catalog offers.
fn apply_default_selection(config: &QuoteConfig, state: &mut SelectionState) {
    let options = &config.options;
    state.selected_product_id = config.products.first().map(|p| p.id.clone()).unwrap_or_default();
    state.selected_color = options.colors.first().map(|c| c.id.clone()).unwrap_or_default();
    state.selected_artwork = options.artwork.first().map(|a| a.id.clone()).unwrap_or_default();
    state.selected_neck_label = options
        .neck_label
        .first()
        .map(|n| n.id.clone())
        .unwrap_or_default();
}

// =============================================================================
// Unit Tests
// =============================================================================
