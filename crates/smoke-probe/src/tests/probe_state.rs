use crate::ProbeState;

use ProbeState::*;

#[test]
fn normal_path_is_legal() {
    let path = [Connecting, Open, Authenticating, Listening, Closing, Closed];

    for pair in path.windows(2) {
        assert!(
            pair[0].can_advance_to(pair[1]),
            "{} -> {} should be legal",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn failed_is_reachable_from_any_non_terminal_state() {
    for state in [Connecting, Open, Authenticating, Listening, Closing] {
        assert!(state.can_advance_to(Failed), "{} -> failed", state);
    }
}

#[test]
fn terminal_states_have_no_successors() {
    for terminal in [Closed, Failed] {
        for next in [Connecting, Open, Authenticating, Listening, Closing, Closed, Failed] {
            assert!(!terminal.can_advance_to(next));
        }
    }
}

#[test]
fn listening_cannot_skip_the_close_handshake() {
    assert!(!Listening.can_advance_to(Closed));
}

#[test]
fn only_closed_and_failed_are_terminal() {
    assert!(Closed.is_terminal());
    assert!(Failed.is_terminal());
    for state in [Connecting, Open, Authenticating, Listening, Closing] {
        assert!(!state.is_terminal());
    }
}
