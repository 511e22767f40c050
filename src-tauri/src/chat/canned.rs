use super::ResponseGenerator;

/// The four scripted replies, chosen uniformly at random.
const RESPONSES: [&str; 4] = [
    "Based on your skin type and registered products, I recommend...",
    "That combination is safe! You can use those products together.",
    "Careful with that mix. I recommend using them on alternate days.",
    "For your combination skin, focus on hydrating the dry areas.",
];

/// Demo response generator: ignores the input entirely and picks one of
/// four fixed strings. Swappable for a real model via [`ResponseGenerator`].
pub struct CannedResponder;

impl ResponseGenerator for CannedResponder {
    fn respond(&self, _user_text: &str) -> String {
        let idx = rand::random_range(0..RESPONSES.len());
        RESPONSES[idx].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_returns_one_of_the_fixed_replies() {
        let responder = CannedResponder;
        for _ in 0..20 {
            let reply = responder.respond("Can I use vitamin C with hyaluronic acid?");
            assert!(RESPONSES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_respond_ignores_input() {
        // Same contract for empty and non-empty input: some fixed reply.
        let responder = CannedResponder;
        let reply = responder.respond("");
        assert!(RESPONSES.contains(&reply.as_str()));
    }
}
