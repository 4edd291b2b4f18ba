use crate::config::ApiConfig;
use crate::listing::{FetchError, ListingPayload, ListingRequest, Post};
use crate::ui::feed::{FeedIntent, FeedReducer, FeedState};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::worker::{UiCommand, UiCommandSender};
use std::time::{Duration, Instant};

/// How long a footer status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Rows moved by PageUp/PageDown.
pub const PAGE_STEP: usize = 5;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// A listing request that has been issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedRequest {
    pub seq: u64,
    pub request: ListingRequest,
}

pub struct App {
    should_quit: bool,
    api: ApiConfig,
    /// Listing view state (MVI pattern).
    feed: FeedState,
    /// Search box state (MVI pattern).
    search: SearchState,
    selected: usize,
    command_sender: Option<UiCommandSender>,
    /// Sequence of the most recent request. Only its result is applied.
    latest_seq: u64,
    last_request: Option<IssuedRequest>,
    in_flight: bool,
    status: Option<(String, Instant)>,
}

impl App {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            should_quit: false,
            api,
            feed: FeedState::default(),
            search: SearchState::default(),
            selected: 0,
            command_sender: None,
            latest_seq: 0,
            last_request: None,
            in_flight: false,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn last_request(&self) -> Option<&IssuedRequest> {
        self.last_request.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// Header label for the listing currently requested.
    pub fn listing_label(&self) -> String {
        self.last_request
            .as_ref()
            .map(|issued| issued.request.label())
            .unwrap_or_else(|| ListingRequest::FrontPage.label())
    }

    // ========================================================================
    // Listing requests
    // ========================================================================

    /// Requests the default listing. Called once at start-up.
    pub fn load_default(&mut self) {
        self.issue(ListingRequest::FrontPage);
    }

    /// Requests the hot listing for `term`, or the default listing when empty.
    pub fn search(&mut self, term: &str) {
        self.issue(ListingRequest::from_term(term));
    }

    /// Searches for the current search box text. The text is kept.
    pub fn submit_search(&mut self) {
        let term = self.search.text.clone();
        self.search(&term);
    }

    fn issue(&mut self, request: ListingRequest) {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        tracing::info!(seq, url = %request.url(&self.api.base_url), "issuing listing request");

        self.last_request = Some(IssuedRequest {
            seq,
            request: request.clone(),
        });
        self.in_flight = true;

        if !self.send_command(UiCommand::Fetch { seq, request }) {
            self.in_flight = false;
            self.on_fetch_failure(FetchError::Transport {
                message: "fetch worker unavailable".to_string(),
            });
        }
    }

    /// Applies a finished request unless a newer one has been issued since.
    pub fn on_fetch_completed(&mut self, seq: u64, result: Result<ListingPayload, FetchError>) {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale listing result");
            return;
        }
        self.in_flight = false;

        match result {
            Ok(payload) => self.on_fetch_success(payload),
            Err(error) => self.on_fetch_failure(error),
        }
    }

    pub fn on_fetch_success(&mut self, payload: ListingPayload) {
        if let ListingPayload::Error { code } = &payload {
            tracing::warn!(%code, "listing returned an API error");
        }
        self.dispatch_feed(FeedIntent::FetchSucceeded {
            payload,
            link_origin: self.api.link_origin.clone(),
        });
        self.selected = 0;
    }

    pub fn on_fetch_failure(&mut self, error: FetchError) {
        tracing::warn!(kind = error.kind(), error = %error, "listing fetch failed");
        self.dispatch_feed(FeedIntent::FetchFailed { error });
        self.selected = 0;
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_feed(&mut self, intent: FeedIntent) {
        dispatch_mvi!(self, feed, FeedReducer, intent);
    }

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.posts().and_then(|posts| posts.get(self.selected))
    }

    fn post_count(&self) -> usize {
        self.feed.posts().map(<[Post]>::len).unwrap_or(0)
    }

    /// Moves the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.post_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let max_index = count - 1;
        self.selected = if delta.is_negative() {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta.unsigned_abs()).min(max_index)
        };
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.post_count().saturating_sub(1);
    }

    // ========================================================================
    // Status line
    // ========================================================================

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn on_tick(&mut self) {
        if let Some((_, since)) = &self.status {
            if since.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::debug!(?command, "no fetch worker attached");
            return true;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "fetch command send failed");
                false
            }
        }
    }
}
