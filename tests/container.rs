use sealbox::{prelude::*, pw};

#[test]
fn round_trip() {
    let payloads: [&[u8]; 4] = [
        b"hello",
        b"this is a secret",
        &[0u8; 1024],
        "\u{1f5dd} unicode text".as_bytes(),
    ];
    for payload in payloads {
        let container = seal(pw!(String::from("user1password")), payload).expect("error sealing");
        assert!(container.len() >= MIN_LEN + payload.len() + TAG_SIZE);
        let opened = open(pw!(String::from("user1password")), &container).expect("error opening");
        assert_eq!(payload, &opened[..]);
    }
}

#[test]
fn empty_payload_round_trips() {
    let container = seal(pw!(String::from("user1password")), b"").expect("error sealing");
    assert_eq!(MIN_LEN + TAG_SIZE, container.len());
    let opened = open(pw!(String::from("user1password")), &container).expect("error opening");
    assert!(opened.is_empty());
}

#[test]
fn wrong_password_rejected() {
    let container = seal(pw!(String::from("user1password")), b"hello").expect("error sealing");
    assert_eq!(
        Err(Error::AuthenticationFailure),
        open(pw!(String::from("user2password")), &container)
    );
}

#[test]
fn every_byte_is_load_bearing() {
    let container =
        seal(pw!(String::from("user1password")), b"this is a secret").expect("error sealing");
    for i in 0..container.len() {
        let mut twiddled = container.clone();
        twiddled[i] ^= 0x01;
        assert_eq!(
            Err(Error::AuthenticationFailure),
            open(pw!(String::from("user1password")), &twiddled),
            "flipped bit in byte {} went unnoticed",
            i
        );
    }
}

#[test]
fn resealing_never_repeats() {
    let a = seal(pw!(String::from("user1password")), b"hello").expect("error sealing");
    let b = seal(pw!(String::from("user1password")), b"hello").expect("error sealing");
    assert_ne!(a, b);

    // Fresh salt and nonce every time, not just differing ciphertext.
    let a = Container::decode(&a).expect("error decoding");
    let b = Container::decode(&b).expect("error decoding");
    assert_ne!(a.salt, b.salt);
    assert_ne!(a.nonce, b.nonce);
}

#[test]
fn short_buffers_never_reach_the_cipher() {
    for len in 0..MIN_LEN {
        let buffer = vec![0x5a; len];
        assert_eq!(
            Err(Error::MalformedContainer),
            open(pw!(String::from("user1password")), &buffer)
        );
    }
}

#[test]
fn concrete_scenario() {
    let container = seal(pw!(String::from("correct-horse")), b"hello").expect("error sealing");
    assert_eq!(MIN_LEN + 5 + TAG_SIZE, container.len());

    let opened = open(pw!(String::from("correct-horse")), &container).expect("error opening");
    assert_eq!(b"hello", &opened[..]);

    assert_eq!(
        Err(Error::AuthenticationFailure),
        open(pw!(String::from("wrong-horse")), &container)
    );
}

#[test]
fn busy_workflow_leaves_first_request_unharmed() {
    let mut workflow = Workflow::new();
    workflow.select_payload(b"hello".to_vec());

    let job = workflow
        .begin(Direction::Seal, &pw!(String::from("correct-horse")))
        .expect("error admitting request");
    assert_eq!(
        Err(Error::Busy),
        workflow
            .run(Direction::Seal, pw!(String::from("correct-horse")))
            .map(|_| ())
    );

    let outcome = job.run(pw!(String::from("correct-horse")));
    let container = workflow.finish(outcome).expect("error sealing").to_vec();
    let opened = open(pw!(String::from("correct-horse")), &container).expect("error opening");
    assert_eq!(b"hello", &opened[..]);
}

#[test]
fn base64_carriage_round_trips() {
    let container = seal(pw!(String::from("user1password")), b"hello").expect("error sealing");
    let text = Container::decode(&container)
        .expect("error decoding")
        .encode_base64();
    let carried = Container::decode_base64(&text).expect("error decoding base64");
    let opened = open(pw!(String::from("user1password")), &carried.encode()).expect("error opening");
    assert_eq!(b"hello", &opened[..]);
}
