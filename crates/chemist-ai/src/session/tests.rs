//! Tests for turn ordering, failure handling, and submit serialization.

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::test_support::{serve_once, EchoClient, GatedClient, StubClient};
use crate::{AiError, Completion, GeminiClient, GeminiConfig, Persona, Role, Turn};

fn candidate(text: &str) -> Result<Completion, AiError> {
    Ok(Completion::Candidate(text.to_string()))
}

fn session_with(script: Vec<Result<Completion, AiError>>) -> (ChatSession, Arc<StubClient>) {
    let client = Arc::new(StubClient::new(script));
    let session = ChatSession::new(client.clone(), Persona::default());
    (session, client)
}

fn persona_pair() -> Vec<Turn> {
    let persona = Persona::default();
    vec![Turn::model(persona.greeting), Turn::user(persona.instructions)]
}

#[tokio::test]
async fn fresh_session_holds_persona_pair() {
    let (session, _) = session_with(vec![]);
    assert_eq!(session.snapshot().await, persona_pair());
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn successful_submits_alternate_roles() {
    let n = 4;
    let script = (0..n).map(|i| candidate(&format!("answer {i}"))).collect();
    let (session, client) = session_with(script);

    for i in 0..n {
        let reply = session.submit(format!("question {i}")).await.unwrap();
        assert_eq!(reply, format!("answer {i}"));
    }

    let turns = session.snapshot().await;
    assert_eq!(turns.len(), 2 + 2 * n);
    for (i, pair) in turns[2..].chunks(2).enumerate() {
        assert_eq!(pair[0], Turn::user(format!("question {i}")));
        assert_eq!(pair[1], Turn::model(format!("answer {i}")));
    }

    // Each request carries the whole history up to and including the new user turn.
    let sent: Vec<usize> = client.requests().iter().map(Vec::len).collect();
    assert_eq!(sent, vec![3, 5, 7, 9]);
    assert_eq!(client.requests()[3].as_slice(), &turns[..9]);
}

#[tokio::test]
async fn empty_candidate_text_is_still_a_reply() {
    let (session, _) = session_with(vec![candidate("")]);
    let exchange = session.exchange("anything").await;
    assert!(matches!(exchange, Exchange::Reply(ref t) if t.is_empty()));
    assert_eq!(session.turn_count().await, 4);
}

#[tokio::test]
async fn transport_failure_leaves_orphaned_user_turn() {
    let (session, _) = session_with(vec![Err(AiError::Http {
        status: 503,
        message: "Service Unavailable".into(),
    })]);

    let err = session.submit("hello").await.unwrap_err();
    assert!(err.to_string().contains("Service Unavailable"));
    assert!(err.to_string().contains("503"));

    let turns = session.snapshot().await;
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[2], Turn::user("hello"));
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn orphaned_turn_is_replayed_on_next_request() {
    let (session, client) = session_with(vec![
        Err(AiError::Network("connection reset".into())),
        candidate("ok"),
    ]);

    assert!(session.submit("first").await.is_err());
    assert_eq!(session.submit("second").await.unwrap(), "ok");

    let second_request = &client.requests()[1];
    let roles: Vec<Role> = second_request[2..].iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::User, Role::User]);
    assert_eq!(session.turn_count().await, 5);
}

#[tokio::test]
async fn rollback_drops_failed_user_turn() {
    let client = Arc::new(StubClient::new(vec![
        candidate("a"),
        Err(AiError::Network("timed out".into())),
    ]));
    let session =
        ChatSession::new(client, Persona::default()).with_rollback_failed_turns(true);

    session.submit("q1").await.unwrap();
    assert!(session.submit("q2").await.is_err());

    let turns = session.snapshot().await;
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[3], Turn::model("a"));
}

#[tokio::test]
async fn missing_candidates_returns_sentinel_without_model_turn() {
    let (session, _) = session_with(vec![Ok(Completion::NoCandidates)]);

    let reply = session.submit("hello").await.unwrap();
    assert_eq!(reply, "Error: Unable to parse API response");
    assert_eq!(reply, SENTINEL_REPLY);

    let turns = session.snapshot().await;
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[2], Turn::user("hello"));
}

#[tokio::test]
async fn exchange_tags_each_outcome() {
    let (session, _) = session_with(vec![
        candidate("yes"),
        Ok(Completion::NoCandidates),
        Err(AiError::Parse("bad json".into())),
    ]);

    assert!(session.exchange("a").await.is_reply());
    assert!(matches!(
        session.exchange("b").await,
        Exchange::SentinelParseFailure
    ));
    assert!(matches!(
        session.exchange("c").await,
        Exchange::TransportFailure(AiError::Parse(_))
    ));
}

#[tokio::test]
async fn reset_restores_persona_pair_between_submits() {
    let (session, client) = session_with(vec![
        candidate("r1"),
        Err(AiError::Network("down".into())),
        candidate("r2"),
        Ok(Completion::NoCandidates),
    ]);

    session.submit("q1").await.unwrap();
    session.reset().await;
    assert_eq!(session.snapshot().await, persona_pair());

    let _ = session.submit("q2").await;
    session.reset().await;
    session.reset().await;
    assert_eq!(session.snapshot().await, persona_pair());

    session.submit("q3").await.unwrap();
    let _ = session.submit("q4").await;
    session.reset().await;
    assert_eq!(session.snapshot().await, persona_pair());

    // The request after a reset starts again from the persona pair.
    assert_eq!(client.requests()[2].len(), 3);
}

#[tokio::test]
async fn phase_is_awaiting_reply_while_in_flight() {
    let client = Arc::new(GatedClient::new());
    let session = Arc::new(ChatSession::new(client.clone(), Persona::default()));

    let task = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("slow").await })
    };

    let mut waited = 0;
    while session.phase() != SessionPhase::AwaitingReply {
        assert!(waited < 1000, "submit never reached the network call");
        tokio::time::sleep(Duration::from_millis(1)).await;
        waited += 1;
    }

    client.gate.add_permits(1);
    assert_eq!(task.await.unwrap().unwrap(), "released");
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn overlapping_submits_do_not_interleave() {
    let client = Arc::new(EchoClient::new(Duration::from_millis(20)));
    let session = Arc::new(ChatSession::new(client.clone(), Persona::default()));

    let handles: Vec<_> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(|text| {
            let session = session.clone();
            tokio::spawn(async move { session.submit(text).await })
        })
        .collect();

    for handle in handles {
        let reply = handle.await.unwrap().unwrap();
        assert!(reply.starts_with("re: "));
    }

    let turns = session.snapshot().await;
    assert_eq!(turns.len(), 8);
    for pair in turns[2..].chunks(2) {
        assert_eq!(pair[0].role, Role::User);
        assert_eq!(pair[1].role, Role::Model);
        assert_eq!(pair[1].text, format!("re: {}", pair[0].text));
    }

    // Every request saw the previous exchange completed.
    assert_eq!(*client.requests.lock().unwrap(), vec![3, 5, 7]);
}

#[tokio::test]
async fn end_to_end_against_stub_endpoint() {
    let (base, server) =
        serve_once(200, r#"{"candidates":[{"content":{"parts":[{"text":"Route A: ..."}]}}]}"#)
            .await;
    let client = GeminiClient::new(GeminiConfig::new("test-key").with_base_url(base)).unwrap();
    let session = ChatSession::new(Arc::new(client), Persona::default());

    let reply = session.submit("Propose a synthesis of aspirin").await.unwrap();
    assert_eq!(reply, "Route A: ...");

    let turns = session.snapshot().await;
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[2], Turn::user("Propose a synthesis of aspirin"));
    assert_eq!(turns[3], Turn::model("Route A: ..."));

    let raw = server.await.unwrap();
    assert!(raw.contains("Propose a synthesis of aspirin"));
}

#[tokio::test]
async fn end_to_end_empty_object_is_sentinel() {
    let (base, server) = serve_once(200, "{}").await;
    let client = GeminiClient::new(GeminiConfig::new("test-key").with_base_url(base)).unwrap();
    let session = ChatSession::new(Arc::new(client), Persona::default());

    let reply = session.submit("hello").await.unwrap();
    server.await.unwrap();
    assert_eq!(reply, SENTINEL_REPLY);
    assert_eq!(session.turn_count().await, 3);
}
