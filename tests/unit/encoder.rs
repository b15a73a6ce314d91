use slp_codec::decoder::decode;
use slp_codec::encoder::{build_genesis, build_mint, document_hash, encode};
use slp_codec::script::{encode_pushdata, encode_u64_be};
use slp_codec::types::{Genesis, Message, Mint, Send};
use slp_codec::{SlpError, SlpMessage, TokenId, TokenType, TransactionType};

fn genesis(decimals: u8) -> Genesis {
    Genesis {
        ticker: b"TEST".to_vec(),
        name: b"some name".to_vec(),
        document_uri: Vec::new(),
        document_hash: None,
        decimals,
        mint_baton_vout: Some(2),
        quantity: 1,
    }
}

#[test]
fn test_genesis_scenario() {
    let script = build_genesis(TokenType::Fungible, &genesis(0)).unwrap();
    let msg = decode(&script).unwrap();
    assert_eq!(msg.transaction_type(), TransactionType::Genesis);
    assert_eq!(msg.token_type, TokenType::Fungible);
    assert_eq!(msg.mint_baton_vout(), Some(2));
    match msg.message {
        Message::Genesis(g) => {
            assert_eq!(g.decimals, 0);
            assert_eq!(g.quantity, 1);
            assert_eq!(g.ticker_utf8(), "TEST");
        }
        other => panic!("expected GENESIS, got {:?}", other),
    }
}

#[test]
fn test_decimals_preserved() {
    for d in 0..=9u8 {
        let script = build_genesis(TokenType::Fungible, &genesis(d)).unwrap();
        match decode(&script).unwrap().message {
            Message::Genesis(g) => assert_eq!(g.decimals, d),
            other => panic!("expected GENESIS, got {:?}", other),
        }
    }
    assert_eq!(
        build_genesis(TokenType::Fungible, &genesis(10)),
        Err(SlpError::DecimalsOutOfRange { decimals: 10 })
    );
}

#[test]
fn test_mint_baton_vout_zero_and_one_rejected() {
    for vout in [0u8, 1] {
        let mut g = genesis(0);
        g.mint_baton_vout = Some(vout);
        assert!(matches!(
            build_genesis(TokenType::Fungible, &g),
            Err(SlpError::MintBatonVoutOutOfRange { .. })
        ));

        let mint = Mint {
            token_id: TokenId::new([1; 32]),
            mint_baton_vout: Some(vout),
            quantity: 1,
        };
        assert!(matches!(
            build_mint(TokenType::Fungible, &mint),
            Err(SlpError::MintBatonVoutOutOfRange { .. })
        ));
    }
}

#[test]
fn test_nft_child_rules_on_encode() {
    let mut g = genesis(0);
    g.mint_baton_vout = None;
    assert!(build_genesis(TokenType::Nft1Child, &g).is_ok());

    let mut bad = g.clone();
    bad.quantity = 0;
    assert!(matches!(
        build_genesis(TokenType::Nft1Child, &bad),
        Err(SlpError::NftChildRuleViolation { .. })
    ));

    let mut bad = g.clone();
    bad.decimals = 1;
    assert!(matches!(
        build_genesis(TokenType::Nft1Child, &bad),
        Err(SlpError::NftChildRuleViolation { .. })
    ));

    let mut bad = g;
    bad.mint_baton_vout = Some(2);
    assert!(matches!(
        build_genesis(TokenType::Nft1Child, &bad),
        Err(SlpError::NftChildRuleViolation { .. })
    ));
}

#[test]
fn test_nft_child_mint_rejected() {
    let msg = SlpMessage::new(
        TokenType::Nft1Child,
        Message::Mint(Mint {
            token_id: TokenId::new([1; 32]),
            mint_baton_vout: None,
            quantity: 1,
        }),
    );
    assert_eq!(encode(&msg), Err(SlpError::NftChildCannotMint));
}

#[test]
fn test_encode_dispatches_on_message() {
    let msg = SlpMessage::new(
        TokenType::Nft1Group,
        Message::Send(Send {
            token_id: TokenId::new([3; 32]),
            amounts: vec![0, 5],
        }),
    );
    let decoded = decode(&encode(&msg).unwrap()).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_pushdata_boundaries() {
    let prefix = |len: usize| {
        let framed = encode_pushdata(&vec![0u8; len]).unwrap();
        framed[..framed.len() - len].to_vec()
    };
    assert_eq!(prefix(0), vec![0x4c, 0x00]);
    assert_eq!(prefix(1), vec![0x01]);
    assert_eq!(prefix(0x4b), vec![0x4b]);
    assert_eq!(prefix(0x4c), vec![0x4c, 0x4c]);
    assert_eq!(prefix(0xfe), vec![0x4c, 0xfe]);
    assert_eq!(prefix(0xff), vec![0x4d, 0xff, 0x00]);
    assert_eq!(prefix(0xffff), vec![0x4d, 0xff, 0xff]);
    assert_eq!(prefix(0x10000), vec![0x4e, 0x00, 0x00, 0x01, 0x00]);
}

#[test]
fn test_integers_written_at_full_width() {
    assert_eq!(encode_u64_be(1), [0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(encode_u64_be(u64::MAX), [0xff; 8]);
}

#[test]
fn test_document_hash_in_genesis() {
    let mut g = genesis(2);
    g.document_uri = b"https://example.com/token.json".to_vec();
    g.document_hash = Some(document_hash(b"{\"name\":\"TEST\"}"));

    let msg = decode(&build_genesis(TokenType::Fungible, &g).unwrap()).unwrap();
    match msg.message {
        Message::Genesis(decoded) => {
            assert_eq!(decoded.document_hash, g.document_hash);
            assert_eq!(decoded.document_uri_utf8(), "https://example.com/token.json");
            assert_eq!(decoded.document_hash_hex().unwrap().len(), 64);
        }
        other => panic!("expected GENESIS, got {:?}", other),
    }
}
