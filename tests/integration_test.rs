use std::io::Cursor;

use storeroute::prelude::*;

/// Fresh, independent harness per test: a router over the standard topology
/// plus both output collectors.
fn harness() -> (Router<MemorySink, MemorySink>, MemorySink, MemorySink) {
    let valid = MemorySink::new();
    let dead_letter = MemorySink::new();
    let router = Router::new(valid.clone(), dead_letter.clone());
    (router, valid, dead_letter)
}

/// Route JSON Lines input through a fresh harness and return both outputs
async fn route_jsonl(input: &str) -> (Vec<KeyedTransaction>, Vec<KeyedTransaction>) {
    let (router, valid, dead_letter) = harness();
    let stream = JsonTransactionStream::new(Cursor::new(input.as_bytes().to_vec()));

    let mut session = RoutingSession::new(router, SilentSkip);
    session.route_stream(stream).await;

    (valid.records(), dead_letter.records())
}

#[tokio::test]
async fn valid_record_reaches_valid_channel_only() {
    let input = "{\"storeName\":\"Store-1\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}\n";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].value.store_name.as_deref(), Some("Store-1"));
    assert!(dead_letter.is_empty());
}

#[tokio::test]
async fn null_store_name_is_dead_lettered() {
    let input = "{\"storeName\":null,\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}\n";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert!(valid.is_empty());
    assert_eq!(dead_letter.len(), 1);
    assert_eq!(dead_letter[0].value.sku.as_deref(), Some("Item-1"));
}

#[tokio::test]
async fn empty_store_name_is_dead_lettered() {
    let input = "{\"storeName\":\"\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}\n";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert!(valid.is_empty());
    assert_eq!(dead_letter.len(), 1);
    assert_eq!(dead_letter[0].value.sku.as_deref(), Some("Item-1"));
}

#[tokio::test]
async fn null_sku_is_dead_lettered() {
    let input = "{\"storeName\":\"Store-1\",\"sku\":null,\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}\n";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert!(valid.is_empty());
    assert_eq!(dead_letter.len(), 1);
    assert_eq!(dead_letter[0].value.store_name.as_deref(), Some("Store-1"));
}

#[tokio::test]
async fn empty_sku_is_dead_lettered() {
    let input = "{\"storeName\":\"Store-1\",\"sku\":\"\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}\n";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert!(valid.is_empty());
    assert_eq!(dead_letter.len(), 1);
    assert_eq!(dead_letter[0].value.sku.as_deref(), Some(""));
}

#[tokio::test]
async fn no_input_leaves_both_channels_empty() {
    let (valid, dead_letter) = route_jsonl("").await;

    assert!(valid.is_empty());
    assert!(dead_letter.is_empty());
}

#[tokio::test]
async fn every_record_lands_in_exactly_one_channel() {
    let input = "\
{\"storeName\":\"Store-1\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}
{\"storeName\":null,\"sku\":\"Item-2\",\"operationType\":\"SALE\",\"quantity\":1,\"unitPrice\":9.99}
{\"storeName\":\"Store-2\",\"sku\":\"\",\"operationType\":\"SALE\",\"quantity\":2,\"unitPrice\":4.5}
{\"storeName\":\"Store-3\",\"sku\":\"Item-4\",\"operationType\":\"RESTOCK\",\"quantity\":7,\"unitPrice\":1.25}
";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert_eq!(valid.len() + dead_letter.len(), 4);
    assert_eq!(valid.len(), 2);
    assert_eq!(dead_letter.len(), 2);
}

#[tokio::test]
async fn payload_and_key_are_preserved_on_both_branches() {
    let input = "\
{\"storeName\":\"Store-1\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}
{\"storeName\":\"Store-2\",\"sku\":\"\",\"operationType\":\"SALE\",\"quantity\":2,\"unitPrice\":4.5}
";

    let (valid, dead_letter) = route_jsonl(input).await;

    // Key equals the store identifier regardless of branch
    assert_eq!(valid[0].key.as_deref(), Some("Store-1"));
    assert_eq!(dead_letter[0].key.as_deref(), Some("Store-2"));

    // Values are forwarded without alteration or enrichment
    assert_eq!(valid[0].value.quantity, 5);
    assert_eq!(valid[0].value.unit_price, 33.2);
    assert_eq!(valid[0].value.operation_type, OperationType::Restock);
    assert_eq!(dead_letter[0].value.sku.as_deref(), Some(""));
    assert_eq!(dead_letter[0].value.quantity, 2);
}

#[tokio::test]
async fn malformed_lines_are_skipped_not_dead_lettered() {
    // Deserialization failures never reach the router; under a skip policy
    // they simply vanish from both channels.
    let input = "\
this is not json
{\"storeName\":\"Store-1\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}
";

    let (valid, dead_letter) = route_jsonl(input).await;

    assert_eq!(valid.len(), 1);
    assert!(dead_letter.is_empty());
}

#[tokio::test]
async fn tap_observes_without_changing_routing() {
    let tap = RecordingTap::new();
    let valid = MemorySink::new();
    let dead_letter = MemorySink::new();
    let router = Router::new(valid.clone(), dead_letter.clone()).with_tap(tap.clone());

    let input = "\
{\"storeName\":\"Store-1\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}
{\"storeName\":null,\"sku\":\"Item-2\",\"operationType\":\"SALE\",\"quantity\":1,\"unitPrice\":9.99}
";
    let stream = JsonTransactionStream::new(Cursor::new(input.as_bytes().to_vec()));
    let mut session = RoutingSession::new(router, SilentSkip);
    session.route_stream(stream).await;

    assert_eq!(tap.count_at(TapStage::PreBranch), 2);
    assert_eq!(tap.count_at(TapStage::PostBranchValid), 1);
    assert_eq!(tap.count_at(TapStage::PostBranchDeadLetter), 1);
    assert_eq!(valid.len(), 1);
    assert_eq!(dead_letter.len(), 1);
}

#[tokio::test]
async fn routes_from_file_to_channel_sinks() {
    use std::io::Write;

    let mut input_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        input_file,
        "{{\"storeName\":\"Store-1\",\"sku\":\"Item-1\",\"operationType\":\"RESTOCK\",\"quantity\":5,\"unitPrice\":33.2}}"
    )
    .unwrap();
    writeln!(
        input_file,
        "{{\"storeName\":\"Store-2\",\"sku\":null,\"operationType\":\"SALE\",\"quantity\":1,\"unitPrice\":9.99}}"
    )
    .unwrap();
    input_file.flush().unwrap();

    let stream = JsonTransactionStream::from_file(input_file.path()).await.unwrap();

    let (valid_sender, valid_receiver) = tokio::sync::mpsc::unbounded_channel();
    let (dead_letter_sender, dead_letter_receiver) = tokio::sync::mpsc::unbounded_channel();

    let valid_task = tokio::spawn(drain_to_writer(valid_receiver, Vec::new()));
    let dead_letter_task = tokio::spawn(drain_to_writer(dead_letter_receiver, Vec::new()));

    let router = Router::new(valid_sender, dead_letter_sender);
    let mut session = RoutingSession::new(router, SkipErrors);
    let completed = session.route_stream(stream).await;
    drop(session);

    assert!(completed);

    let valid_output = String::from_utf8(valid_task.await.unwrap().unwrap()).unwrap();
    let dead_letter_output = String::from_utf8(dead_letter_task.await.unwrap().unwrap()).unwrap();

    assert_eq!(valid_output.lines().count(), 1);
    assert!(valid_output.contains("\"storeName\":\"Store-1\""));
    assert_eq!(dead_letter_output.lines().count(), 1);
    assert!(dead_letter_output.contains("\"sku\":null"));
}

#[tokio::test]
async fn sharded_topology_routes_all_streams() {
    use futures::stream;

    let (router, valid, dead_letter) = harness();

    let good = |store: &str, sku: &str| {
        Ok(ItemTransaction::new(
            Some(store.to_string()),
            Some(sku.to_string()),
            OperationType::Sale,
            1,
            2.0,
        )
        .into_keyed())
    };
    let bad = |sku: &str| {
        Ok(ItemTransaction::new(
            None,
            Some(sku.to_string()),
            OperationType::Sale,
            1,
            2.0,
        )
        .into_keyed())
    };

    let results = StreamRouter::new(router, SilentSkip)
        .with_shards(2)
        .add_stream(stream::iter(vec![good("Store-1", "Item-1"), bad("Item-2")]))
        .add_stream(stream::iter(vec![good("Store-2", "Item-3")]))
        .route_all()
        .await;

    assert!(results.all_completed());
    assert_eq!(results.total_streams, 2);
    assert_eq!(valid.len(), 2);
    assert_eq!(dead_letter.len(), 1);
}
