use worte_core::Session;
use worte_speech::SpeechQueue;

/// Hand the current word to the speech worker. A no-op unless the card
/// shows the bare word.
pub fn handle_speak(session: &Session, speech: Option<&SpeechQueue>) {
    let Some(request) = session.speak_current() else {
        tracing::debug!("Speech not available at level {:?}", session.level());
        return;
    };

    let Some(queue) = speech else {
        tracing::debug!("Speech worker not running");
        return;
    };

    if queue.submit(request) {
        tracing::debug!("Speech request queued");
    }
}
