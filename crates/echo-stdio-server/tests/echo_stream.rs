//! Stream-level behaviour of the responder over in-memory pipes.

use echo_stdio_server::{EchoConfig, EchoResponder, LineTransport, MalformedPolicy};
use serde_json::{Value, json};
use tokio::io::{AsyncWriteExt, BufReader};

async fn run(config: EchoConfig, input: &str) -> Vec<Value> {
    let responder = EchoResponder::new(config);
    let mut transport = LineTransport::new(input.as_bytes(), Vec::new());
    responder.serve(&mut transport).await.expect("serve should succeed");

    let (_, written) = transport.into_inner();
    String::from_utf8(written)
        .expect("output is UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("every output line is JSON"))
        .collect()
}

#[tokio::test]
async fn identity_law_for_every_value_type() {
    let values = [
        json!("hello"),
        json!(""),
        json!(0),
        json!(-12),
        json!(3.25),
        json!(true),
        json!(false),
        json!(null),
        json!([]),
        json!({}),
        json!([1, [2, [3, {"deep": [null]}]]]),
        json!({"a": {"b": {"c": "d"}}, "list": [1, "x", false]}),
    ];
    let ids = [json!(1), json!("abc"), json!(null), json!(-4), json!("")];

    let mut input = String::new();
    let mut expected = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let id = ids[i % ids.len()].clone();
        let request = json!({"jsonrpc": "2.0", "id": id, "params": {"input": value}});
        input.push_str(&request.to_string());
        input.push('\n');
        expected.push(json!({"jsonrpc": "2.0", "id": id, "result": value}));
    }

    assert_eq!(run(EchoConfig::new(), &input).await, expected);
}

#[tokio::test]
async fn exact_wire_text_for_documented_examples() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"params":{"input":"hello"}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":"abc","params":{"input":42}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":null,"params":{"input":{"a":[1,2,3]}}}"#,
        "\n",
    );

    let responder = EchoResponder::new(EchoConfig::new());
    let mut transport = LineTransport::new(input.as_bytes(), Vec::new());
    responder.serve(&mut transport).await.unwrap();
    let (_, written) = transport.into_inner();

    assert_eq!(
        String::from_utf8(written).unwrap(),
        concat!(
            r#"{"jsonrpc":"2.0","id":1,"result":"hello"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":"abc","result":42}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":null,"result":{"a":[1,2,3]}}"#,
            "\n",
        )
    );
}

#[tokio::test]
async fn numbers_are_echoed_with_their_original_text() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"params":{"input":1e3}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"params":{"input":123456789012345678901234567890}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":18446744073709551616,"params":{"input":[0.10,-0.0]}}"#,
        "\n",
    );

    let responder = EchoResponder::new(EchoConfig::new());
    let mut transport = LineTransport::new(input.as_bytes(), Vec::new());
    responder.serve(&mut transport).await.unwrap();
    let (_, written) = transport.into_inner();

    assert_eq!(
        String::from_utf8(written).unwrap(),
        concat!(
            r#"{"jsonrpc":"2.0","id":1,"result":1e3}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"result":123456789012345678901234567890}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":18446744073709551616,"result":[0.10,-0.0]}"#,
            "\n",
        )
    );
}

#[tokio::test]
async fn blank_lines_follow_the_malformed_policy() {
    let input = "{\"id\":1,\"params\":{\"input\":1}}\n\n   \n{\"id\":2,\"params\":{\"input\":2}}\n";

    let out = run(EchoConfig::new(), input).await;
    assert_eq!(out.len(), 4);
    assert_eq!(out[1]["error"]["code"], json!(-32700));
    assert_eq!(out[2]["error"]["code"], json!(-32700));
    assert_eq!(out[3], json!({"jsonrpc": "2.0", "id": 2, "result": 2}));

    let out = run(EchoConfig::new().on_malformed(MalformedPolicy::Skip), input).await;
    assert_eq!(
        out,
        vec![
            json!({"jsonrpc": "2.0", "id": 1, "result": 1}),
            json!({"jsonrpc": "2.0", "id": 2, "result": 2}),
        ]
    );
}

#[tokio::test]
async fn malformed_line_does_not_stop_the_stream() {
    let input = "{\"jsonrpc\":\"2.0\",\"id\":1,\"params\":{\"input\":1}}\n\
                 {\"jsonrpc\":\"2.0\",\"id\":2,\"params\":\n\
                 {\"jsonrpc\":\"2.0\",\"id\":3,\"params\":{\"input\":3}}\n";

    let out = run(EchoConfig::new(), input).await;
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], json!({"jsonrpc": "2.0", "id": 1, "result": 1}));
    assert_eq!(out[1]["id"], Value::Null);
    assert_eq!(out[1]["error"]["code"], json!(-32700));
    assert_eq!(out[2], json!({"jsonrpc": "2.0", "id": 3, "result": 3}));

    let out = run(EchoConfig::new().on_malformed(MalformedPolicy::Skip), input).await;
    assert_eq!(
        out,
        vec![
            json!({"jsonrpc": "2.0", "id": 1, "result": 1}),
            json!({"jsonrpc": "2.0", "id": 3, "result": 3}),
        ]
    );
}

#[tokio::test]
async fn crlf_input_and_missing_final_newline() {
    let input = "{\"id\":1,\"params\":{\"input\":\"a\"}}\r\n{\"id\":2,\"params\":{\"input\":\"b\"}}";

    let out = run(EchoConfig::new(), input).await;
    assert_eq!(
        out,
        vec![
            json!({"jsonrpc": "2.0", "id": 1, "result": "a"}),
            json!({"jsonrpc": "2.0", "id": 2, "result": "b"}),
        ]
    );
}

#[tokio::test]
async fn answers_arrive_while_the_input_is_still_open() {
    let (client, server) = tokio::io::duplex(1024);
    let (server_read, server_write) = tokio::io::split(server);
    let (client_read, mut client_write) = tokio::io::split(client);

    let serve = tokio::spawn(async move {
        let responder = EchoResponder::new(EchoConfig::new());
        let mut transport = LineTransport::new(BufReader::new(server_read), server_write);
        responder.serve(&mut transport).await
    });

    let mut replies = LineTransport::new(BufReader::new(client_read), tokio::io::sink());

    client_write
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":\"first\",\"params\":{\"input\":[1]}}\n")
        .await
        .unwrap();
    let reply = replies.read_line().await.unwrap().expect("a reply line");
    assert_eq!(reply, br#"{"jsonrpc":"2.0","id":"first","result":[1]}"#.to_vec());

    client_write
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":\"second\",\"params\":{\"input\":{}}}\n")
        .await
        .unwrap();
    let reply = replies.read_line().await.unwrap().expect("a reply line");
    assert_eq!(reply, br#"{"jsonrpc":"2.0","id":"second","result":{}}"#.to_vec());

    client_write.shutdown().await.unwrap();
    drop(client_write);

    let stats = serve.await.unwrap().unwrap();
    assert_eq!(stats.lines_read, 2);
    assert_eq!(stats.results_written, 2);
}
