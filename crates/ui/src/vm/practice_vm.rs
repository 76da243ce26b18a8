use lesson_core::session::{FeedbackKind, MSG_UNSUPPORTED, SessionSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub class: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PracticeVm {
    pub position_label: String,
    pub completed_label: String,
    pub progress_percent: f32,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub auto_advance: bool,
    pub listening: bool,
    pub listen_label: &'static str,
    pub listen_disabled: bool,
    pub transcript: Option<String>,
    pub feedback: Option<FeedbackVm>,
    pub unsupported_notice: Option<&'static str>,
}

impl PracticeVm {
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%", self.progress_percent)
    }
}

#[must_use]
pub fn map_practice(snapshot: &SessionSnapshot) -> PracticeVm {
    let position = snapshot.index + 1;
    let total = snapshot.total.max(1);
    #[allow(clippy::cast_precision_loss)]
    let progress_percent = position as f32 / total as f32 * 100.0;

    let feedback = match snapshot.feedback.kind {
        FeedbackKind::None => None,
        FeedbackKind::Success => Some(FeedbackVm {
            class: "feedback success",
            message: snapshot.feedback.message.clone(),
        }),
        FeedbackKind::Error => Some(FeedbackVm {
            class: "feedback error",
            message: snapshot.feedback.message.clone(),
        }),
    };

    let transcript = if snapshot.transcript.is_empty() {
        None
    } else {
        Some(format!("\"{}\"", snapshot.transcript))
    };

    PracticeVm {
        position_label: format!("{position} of {}", snapshot.total),
        completed_label: format!("{position} of {} completed", snapshot.total),
        progress_percent,
        can_go_back: snapshot.can_go_back(),
        can_go_forward: snapshot.can_go_forward(),
        auto_advance: snapshot.auto_advance,
        listening: snapshot.listening,
        listen_label: if snapshot.listening {
            "Stop Listening"
        } else {
            "Start Speaking"
        },
        listen_disabled: !snapshot.recognition_available,
        transcript,
        feedback,
        unsupported_notice: (!snapshot.recognition_available).then_some(MSG_UNSUPPORTED),
    }
}

#[cfg(test)]
mod tests {
    use lesson_core::model::LessonItem;
    use lesson_core::session::PracticeSession;

    use super::map_practice;

    fn session(len: usize) -> PracticeSession {
        let items = (1..=len).map(|n| LessonItem::plain(n.to_string())).collect();
        PracticeSession::new(items).unwrap()
    }

    #[test]
    fn first_item_of_four_shows_quarter_progress() {
        let session = session(4);
        let vm = map_practice(&session.snapshot());
        assert_eq!(vm.position_label, "1 of 4");
        assert_eq!(vm.completed_label, "1 of 4 completed");
        assert!((vm.progress_percent - 25.0).abs() < f32::EPSILON);
        assert_eq!(vm.progress_style(), "width: 25.00%");
        assert!(!vm.can_go_back);
        assert!(vm.can_go_forward);
        assert_eq!(vm.listen_label, "Start Speaking");
        assert!(!vm.listen_disabled);
        assert!(vm.unsupported_notice.is_none());
    }

    #[test]
    fn listening_and_feedback_are_mapped() {
        let mut session = session(2);
        session.mount();
        session.next();
        session.start_listening();
        let vm = map_practice(&session.snapshot());
        assert_eq!(vm.listen_label, "Stop Listening");
        assert!(!vm.can_go_forward);

        session.on_recognition_result("3");
        let vm = map_practice(&session.snapshot());
        assert_eq!(vm.transcript.as_deref(), Some("\"3\""));
        let feedback = vm.feedback.expect("feedback");
        assert_eq!(feedback.class, "feedback error");
        assert!(feedback.message.contains('2'));
    }

    #[test]
    fn missing_recognition_disables_the_speak_button() {
        let mut session = session(3);
        session.set_recognition_available(false);
        let vm = map_practice(&session.snapshot());
        assert!(vm.listen_disabled);
        assert!(vm.unsupported_notice.is_some());
    }
}
