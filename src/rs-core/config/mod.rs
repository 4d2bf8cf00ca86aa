const DEFAULT_RETRY_DELAY: f64 = 1000.;
const DEFAULT_MAX_RETRY_DELAY: f64 = 4000.;

/// Configuration on which the `Dispatcher` relies.
/// Can be updated at any time through the `Dispatcher`'s setters.
pub(crate) struct ViewerConfiguration {
    /// URL of the HLS playlist to play.
    ///
    /// Its path is replaced each time the muxer is restarted, as a new playlist is then produced.
    pub(crate) stream_url: String,

    /// Endpoint to `POST` to when asking the backend to restart the muxer.
    pub(crate) restart_endpoint: String,

    /// Timeout, in milliseconds, of the restart request.
    ///
    /// `None` to wait for as long as needed.
    pub(crate) restart_request_timeout: Option<f64>,

    /// Interval, in milliseconds, at which we check if a sped-up playback caught up with the
    /// wanted latency.
    pub(crate) catch_up_check_interval: f64,

    /// Distance, in seconds, to the wanted latency under which we consider that a sped-up
    /// playback caught up.
    pub(crate) catch_up_margin: f64,

    /// Amount of seconds added to the position of a bookmark when seeking to it, so we land
    /// inside a segment rather than on its boundary.
    pub(crate) bookmark_seek_bias: f64,

    /// Distance, in seconds, to the end of the media at which "skip to live" seeks.
    pub(crate) live_edge_offset: f64,

    /// Delay, in seconds, behind the stream library's live sync position at which "back to
    /// delay" seeks.
    pub(crate) target_latency: f64,

    pub(crate) load_policy: StreamLoadPolicy,
}

impl Default for ViewerConfiguration {
    fn default() -> Self {
        Self {
            stream_url: "/camera/index.m3u8".to_owned(),
            restart_endpoint: "/restart-muxer".to_owned(),
            restart_request_timeout: None,
            catch_up_check_interval: 1000.,
            catch_up_margin: 2.,
            bookmark_seek_bias: 0.5,
            live_edge_offset: 0.5,
            target_latency: 20.,
            load_policy: StreamLoadPolicy::default(),
        }
    }
}

/// Buffering and retry settings handed to the stream library.
///
/// When the muxer restarts, its playlist and segments briefly disappear: requests for them
/// should be retried for long enough to ride out that window.
pub(crate) struct StreamLoadPolicy {
    /// Amount of already-played media, in seconds, the stream library should keep buffered.
    /// Seeking back to a bookmark is only possible within that window.
    pub(crate) back_buffer_length: f64,

    /// Time, in milliseconds, allowed between the start of a request and its first byte.
    pub(crate) max_time_to_first_byte: f64,

    /// Time, in milliseconds, allowed for a whole request.
    pub(crate) max_load_time: f64,

    /// Amount of times a request which timeouted might be retried.
    pub(crate) timeout_retry_count: u32,

    /// Amount of times a request which failed (HTTP 404 included) might be retried.
    pub(crate) error_retry_count: u32,

    /// Initial delay, in milliseconds, before retrying a request.
    pub(crate) retry_delay: f64,

    /// Maximum delay, in milliseconds, before retrying a request.
    pub(crate) max_retry_delay: f64,
}

impl Default for StreamLoadPolicy {
    fn default() -> Self {
        Self {
            back_buffer_length: 900.,
            max_time_to_first_byte: 10000.,
            max_load_time: 20000.,
            timeout_retry_count: 4,
            error_retry_count: 12,
            retry_delay: DEFAULT_RETRY_DELAY,
            max_retry_delay: DEFAULT_MAX_RETRY_DELAY,
        }
    }
}

impl StreamLoadPolicy {
    /// Returns `true` if a request which already failed `retry_count` times should be retried.
    ///
    /// The HTTP status is not considered: a 404 is expected while the muxer restarts.
    pub(crate) fn should_retry(&self, retry_count: u32, _status: Option<u32>) -> bool {
        retry_count < self.error_retry_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_retry_up_to_cap() {
        let policy = StreamLoadPolicy {
            error_retry_count: 3,
            ..StreamLoadPolicy::default()
        };
        assert!(policy.should_retry(0, Some(404)));
        assert!(policy.should_retry(2, Some(404)));
        assert!(!policy.should_retry(3, Some(404)));
        assert!(!policy.should_retry(4, None));
        assert!(policy.should_retry(1, Some(500)));
    }

    #[test]
    fn test_no_retry_when_cap_is_zero() {
        let policy = StreamLoadPolicy {
            error_retry_count: 0,
            ..StreamLoadPolicy::default()
        };
        assert!(!policy.should_retry(0, Some(404)));
    }
}
