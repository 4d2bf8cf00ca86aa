use thiserror::Error;

use crate::{
    bindings::{
        MediaElement, RequestErrorReason, RequestId, RestartBackend, StreamSource, ViewerUi,
    },
    utils::url::{rewrite_path, UrlRewriteError},
    Logger,
};

#[derive(Error, Debug)]
pub(crate) enum RestartError {
    #[error(
        "Restart request failed ({reason:?}): {}",
        .message.as_deref().unwrap_or("no details")
    )]
    RequestFailed {
        reason: RequestErrorReason,
        message: Option<String>,
    },
    #[error("Could not build the new stream URL: {0}")]
    InvalidNewUrl(#[from] UrlRewriteError),
}

/// Information on the restart request currently pending.
#[derive(Clone, Copy, Debug)]
struct PendingRestart {
    request_id: RequestId,
    /// If `true`, the media was playing when the restart was asked for and playback should be
    /// resumed once the new stream is loaded.
    was_playing: bool,
}

/// Outcome of a finished restart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RestartOutcome {
    /// The stream was reloaded from the given URL.
    Reloaded { url: String, resumed: bool },
    /// The backend did not answer with a new playlist path, nothing changed.
    NoUpdate,
    /// The request failed or its response could not be used, nothing changed.
    Failed,
    /// The response did not correspond to the pending request.
    UnknownRequest,
}

/// Asks the backend to restart the muxer and reloads the stream from the new playlist it
/// produces.
///
/// Only one restart can be pending at a time.
pub(crate) struct MuxerRestartCoordinator {
    pending: Option<PendingRestart>,
}

impl MuxerRestartCoordinator {
    pub(crate) fn new() -> Self {
        Self { pending: None }
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Method to call when the user asks for a restart.
    ///
    /// Returns the `RequestId` of the restart request, `None` if a restart was already pending
    /// in which case nothing is done.
    pub(crate) fn request_restart<P>(
        &mut self,
        page: &mut P,
        endpoint: &str,
        timeout: Option<f64>,
    ) -> Option<RequestId>
    where
        P: MediaElement + RestartBackend + ?Sized,
    {
        if self.pending.is_some() {
            Logger::info("Restart: already in progress, ignoring request");
            return None;
        }
        let was_playing = !page.is_paused();
        Logger::info("Restart: asking backend to restart the muxer");
        let request_id = page.post_restart(endpoint, timeout);
        self.pending = Some(PendingRestart {
            request_id,
            was_playing,
        });
        Some(request_id)
    }

    /// Method to call once the backend answered the restart request.
    ///
    /// With a `200` status, `body` is the path of the new playlist: `stream_url` gets that path
    /// and the stream is reloaded from it. Any other status, or an empty body, leaves everything
    /// as is.
    pub(crate) fn on_response<P>(
        &mut self,
        page: &mut P,
        request_id: RequestId,
        status: u32,
        body: &str,
        stream_url: &mut String,
    ) -> RestartOutcome
    where
        P: MediaElement + StreamSource + ViewerUi + ?Sized,
    {
        let Some(pending) = self.settle(request_id) else {
            return RestartOutcome::UnknownRequest;
        };
        if status != 200 {
            Logger::warn(&format!("Restart: backend answered with status {status}"));
            return RestartOutcome::NoUpdate;
        }
        let new_path = body.trim();
        if new_path.is_empty() {
            Logger::warn("Restart: backend answered without a new playlist path");
            return RestartOutcome::NoUpdate;
        }
        let new_url = match rewrite_path(stream_url, &page.page_location(), new_path) {
            Ok(url) => url,
            Err(err) => {
                Logger::error(&RestartError::from(err).to_string());
                return RestartOutcome::Failed;
            }
        };
        Logger::info(&format!("Restart: loading new stream {new_url}"));
        page.load_source(&new_url);
        if pending.was_playing {
            page.play();
        }
        *stream_url = new_url.clone();
        RestartOutcome::Reloaded {
            url: new_url,
            resumed: pending.was_playing,
        }
    }

    /// Method to call if the restart request could not complete.
    pub(crate) fn on_request_failed(
        &mut self,
        request_id: RequestId,
        reason: RequestErrorReason,
        message: Option<String>,
    ) -> RestartOutcome {
        if self.settle(request_id).is_none() {
            return RestartOutcome::UnknownRequest;
        }
        Logger::error(&RestartError::RequestFailed { reason, message }.to_string());
        RestartOutcome::Failed
    }

    /// Clear the pending restart if it corresponds to `request_id`, whatever the outcome.
    fn settle(&mut self, request_id: RequestId) -> Option<PendingRestart> {
        match self.pending {
            Some(pending) if pending.request_id == request_id => self.pending.take(),
            _ => {
                Logger::warn(&format!("Restart: unknown request {request_id} finished"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{test_support::FakePage, LogLevel};

    const STREAM_URL: &str = "http://192.168.23.1/camera/index.m3u8";

    fn start(page: &mut FakePage, coordinator: &mut MuxerRestartCoordinator) -> RequestId {
        coordinator
            .request_restart(page, "/restart-muxer", None)
            .unwrap()
    }

    #[test]
    fn test_single_request_while_in_flight() {
        let mut page = FakePage::new();
        let mut coordinator = MuxerRestartCoordinator::new();
        assert!(coordinator
            .request_restart(&mut page, "/restart-muxer", Some(5000.))
            .is_some());
        assert_eq!(
            coordinator.request_restart(&mut page, "/restart-muxer", Some(5000.)),
            None
        );
        assert!(coordinator.is_in_flight());
        assert_eq!(
            page.state().restart_posts,
            vec![("/restart-muxer".to_owned(), Some(5000.))]
        );
    }

    #[test]
    fn test_success_reloads_and_resumes() {
        let mut page = FakePage::new();
        page.state().paused = false;
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);

        let mut stream_url = STREAM_URL.to_owned();
        let body = "/camera/k3j9xq.m3u8\n";
        let outcome = coordinator.on_response(&mut page, id, 200, body, &mut stream_url);
        let expected = "http://192.168.23.1/camera/k3j9xq.m3u8";
        assert_eq!(
            outcome,
            RestartOutcome::Reloaded {
                url: expected.to_owned(),
                resumed: true
            }
        );
        assert_eq!(stream_url, expected);
        assert_eq!(page.state().loaded_sources, vec![expected.to_owned()]);
        assert_eq!(page.state().play_calls, 1);
        assert!(!coordinator.is_in_flight());
    }

    #[test]
    fn test_success_while_paused_does_not_resume() {
        let mut page = FakePage::new();
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);

        // playback started meanwhile, what matters is the state when the restart was asked
        page.state().paused = false;
        let mut stream_url = "/camera/index.m3u8".to_owned();
        let body = "/camera/b.m3u8";
        let outcome = coordinator.on_response(&mut page, id, 200, body, &mut stream_url);
        assert_eq!(
            outcome,
            RestartOutcome::Reloaded {
                url: "http://192.168.23.1/camera/b.m3u8".to_owned(),
                resumed: false
            }
        );
        assert_eq!(page.state().play_calls, 0);
    }

    #[test]
    fn test_non_200_is_a_no_op() {
        let mut page = FakePage::new();
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);
        let mut stream_url = STREAM_URL.to_owned();
        let outcome = coordinator.on_response(&mut page, id, 503, "busy", &mut stream_url);
        assert_eq!(outcome, RestartOutcome::NoUpdate);
        assert_eq!(stream_url, STREAM_URL);
        assert!(page.state().loaded_sources.is_empty());
        assert!(!coordinator.is_in_flight());
    }

    #[test]
    fn test_empty_body_is_a_no_op() {
        let mut page = FakePage::new();
        page.state().paused = false;
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);
        let mut stream_url = "http://192.168.23.1:8888/camera/index.m3u8".to_owned();
        let outcome = coordinator.on_response(&mut page, id, 200, "  \n", &mut stream_url);
        assert_eq!(outcome, RestartOutcome::NoUpdate);
        assert_eq!(stream_url, "http://192.168.23.1:8888/camera/index.m3u8");
        assert!(page.state().loaded_sources.is_empty());
        assert_eq!(page.state().play_calls, 0);
        assert!(!coordinator.is_in_flight());
    }

    #[test]
    fn test_failure_clears_in_flight_flag() {
        let mut page = FakePage::new();
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);
        Logger::take_captured();
        let outcome = coordinator.on_request_failed(
            id,
            RequestErrorReason::Error,
            Some("NetworkError".to_owned()),
        );
        assert_eq!(outcome, RestartOutcome::Failed);
        assert!(!coordinator.is_in_flight());
        assert!(Logger::take_captured()
            .iter()
            .any(|(lvl, msg)| *lvl == LogLevel::Error && msg.contains("NetworkError")));

        // a new restart can now be asked for
        assert!(coordinator
            .request_restart(&mut page, "/restart-muxer", None)
            .is_some());
        assert_eq!(page.state().restart_posts.len(), 2);
    }

    #[test]
    fn test_unusable_url_clears_in_flight_flag() {
        let mut page = FakePage::new();
        page.state().location = "about:blank".to_owned();
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);
        let mut stream_url = "/camera/index.m3u8".to_owned();
        let body = "/camera/x.m3u8";
        let outcome = coordinator.on_response(&mut page, id, 200, body, &mut stream_url);
        assert_eq!(outcome, RestartOutcome::Failed);
        assert_eq!(stream_url, "/camera/index.m3u8");
        assert!(page.state().loaded_sources.is_empty());
        assert!(!coordinator.is_in_flight());
    }

    #[test]
    fn test_unknown_request_is_ignored() {
        let mut page = FakePage::new();
        let mut coordinator = MuxerRestartCoordinator::new();
        let id = start(&mut page, &mut coordinator);
        let mut stream_url = STREAM_URL.to_owned();
        assert_eq!(
            coordinator.on_response(&mut page, id + 100, 200, "/a.m3u8", &mut stream_url),
            RestartOutcome::UnknownRequest
        );
        assert!(coordinator.is_in_flight());
        assert_eq!(
            coordinator.on_request_failed(id + 100, RequestErrorReason::Timeout, None),
            RestartOutcome::UnknownRequest
        );
        assert!(coordinator.is_in_flight());
    }
}
