//! Lucky-draw admin panel state.
//!
//! DESIGN
//! ======
//! The panel tracks three independent pieces of remote state (the count,
//! the participant list, and the in-flight draw), each written by its own
//! fetch. One failing never blocks the others: the count degrades to
//! zero/unknown and the list to empty while the rest keeps rendering.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::error::{Error, UNCONFIGURED_MESSAGE};
use crate::net::types::{CountResponse, DrawResponse, ListResponse, Participant, Winner};
use crate::util::collate;

/// Thai message for a draw request that failed at the transport level.
pub const DRAW_FAILED_MESSAGE: &str = "สุ่มรางวัลไม่สำเร็จ ลองใหม่อีกครั้งนะครับ";

/// Which draw button is currently in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawScope {
    /// Draw across every registration.
    All,
    /// Draw restricted to one product/branch option.
    Product(String),
}

impl DrawScope {
    /// Query filter value, when scoped.
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Product(product) => Some(product),
        }
    }

    /// Thai label used in fallback messages; "ทั้งหมด" for the all scope.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "ทั้งหมด",
            Self::Product(product) => product,
        }
    }
}

/// Panel state: live count, masked list, draw lifecycle, last winner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawPanelState {
    /// Registrant count; `None` until loaded or after a transport failure.
    pub total_registered: Option<u32>,
    pub loading_count: bool,
    pub loading_list: bool,
    /// Registrants sorted by collated name, ascending.
    pub participants: Vec<Participant>,
    /// Whether the masked list is expanded.
    pub show_list: bool,
    /// Most recently drawn winner still on display.
    pub winner: Option<Winner>,
    /// Error line under the draw buttons.
    pub error: Option<String>,
    /// In-flight draw scope; `None` when idle.
    pub drawing: Option<DrawScope>,
}

impl DrawPanelState {
    /// Draw buttons are disabled while a draw is in flight, when the count
    /// is zero or unknown, or when the endpoint is unconfigured.
    #[must_use]
    pub fn draw_disabled(&self, endpoint_configured: bool) -> bool {
        self.drawing.is_some() || self.total_registered.unwrap_or(0) == 0 || !endpoint_configured
    }

    /// Mark both remote reads as loading before a refresh round.
    pub fn begin_refresh(&mut self) {
        self.loading_count = true;
        self.loading_list = true;
    }

    /// Start a draw for `scope`.
    ///
    /// Clears the previous winner before the request resolves, so a failed
    /// attempt leaves the winner area blank rather than restoring the old
    /// name. This mirrors the page's observed behavior.
    pub fn begin_draw(&mut self, scope: DrawScope) {
        self.error = None;
        self.winner = None;
        self.drawing = Some(scope);
    }

    /// Record the outcome of the in-flight draw.
    pub fn finish_draw(&mut self, outcome: Result<Winner, String>) {
        match outcome {
            Ok(winner) => self.winner = Some(winner),
            Err(message) => self.error = Some(message),
        }
        self.drawing = None;
    }

    /// Apply a count fetch result: explicit refusal shows zero, transport
    /// failure shows unknown.
    pub fn apply_count(&mut self, result: Result<CountResponse, Error>) {
        self.total_registered = match result {
            Ok(resp) if resp.success => Some(resp.count.unwrap_or(0)),
            Ok(_) => Some(0),
            Err(_) => None,
        };
        self.loading_count = false;
    }

    /// Apply a list fetch result, sorted by collated name. An explicit
    /// refusal keeps the previous list; a transport failure empties it.
    pub fn apply_participants(&mut self, result: Result<ListResponse, Error>) {
        match result {
            Ok(resp) if resp.success => {
                let mut list = resp.participants.unwrap_or_default();
                list.sort_by(|a, b| collate::compare_names(&a.name, &b.name));
                self.participants = list;
            }
            Ok(_) => {}
            Err(_) => self.participants = Vec::new(),
        }
        self.loading_list = false;
    }
}

/// Collapse a draw result into the winner or the user-facing error line.
///
/// A refusal surfaces the server message verbatim when present, otherwise a
/// localized fallback naming the drawn scope.
#[must_use]
pub fn draw_outcome(result: Result<DrawResponse, Error>, scope: &DrawScope) -> Result<Winner, String> {
    match result {
        Ok(resp) if resp.success => resp.winner.ok_or_else(|| no_data_message(scope)),
        Ok(resp) => Err(resp.message.unwrap_or_else(|| no_data_message(scope))),
        Err(Error::Unconfigured) => Err(UNCONFIGURED_MESSAGE.to_owned()),
        Err(_) => Err(DRAW_FAILED_MESSAGE.to_owned()),
    }
}

fn no_data_message(scope: &DrawScope) -> String {
    format!(
        "ยังไม่มีข้อมูลสำหรับสุ่มรางวัลสำหรับสินค้า: {}",
        scope.label()
    )
}
