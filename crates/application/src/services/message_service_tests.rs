//! 私信服务单元测试
//!
//! 使用 mock 时钟控制时间戳，验证会话查询的对称性与升序排序。

#[cfg(test)]
mod message_service_tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use chrono::TimeZone;
    use domain::{DomainError, Timestamp};
    use mockall::mock;
    use uuid::Uuid;

    use crate::clock::Clock;
    use crate::error::ApplicationError;
    use crate::memory::InMemoryMessageRepository;
    use crate::services::{MessageService, MessageServiceDependencies, SendMessageRequest};

    mock! {
        pub TestClock {}

        impl Clock for TestClock {
            fn now(&self) -> Timestamp;
        }
    }

    /// 每次调用返回递增一秒的确定性时钟
    fn ticking_clock() -> MockTestClock {
        let mut clock = MockTestClock::new();
        let counter = AtomicI64::new(0);
        clock.expect_now().returning(move || {
            let tick = counter.fetch_add(1, Ordering::SeqCst);
            chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::seconds(tick)
        });
        clock
    }

    fn create_message_service() -> MessageService {
        MessageService::new(MessageServiceDependencies {
            message_repository: Arc::new(InMemoryMessageRepository::new()),
            clock: Arc::new(ticking_clock()),
        })
    }

    #[tokio::test]
    async fn test_conversation_is_symmetric() {
        let service = create_message_service();
        let sender = Uuid::new_v4();
        let recipient = Uuid::new_v4();

        let sent = service
            .send_message(
                SendMessageRequest {
                    recipient_id: recipient,
                    content: "hello there".to_string(),
                },
                sender,
            )
            .await
            .unwrap();

        // 会话双方查询到同一结果集
        let from_sender = service.get_conversation(sender, recipient).await.unwrap();
        let from_recipient = service.get_conversation(recipient, sender).await.unwrap();

        assert_eq!(from_sender.len(), 1);
        assert_eq!(from_recipient.len(), 1);
        assert_eq!(from_sender[0].id, sent.id);
        assert_eq!(from_recipient[0].id, sent.id);
        assert_eq!(from_sender[0].content, "hello there");
    }

    #[tokio::test]
    async fn test_conversation_ordered_ascending() {
        let service = create_message_service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        // 两个方向交替发送
        for content in ["first", "second", "third"] {
            let (from, to) = if content == "second" {
                (bob, alice)
            } else {
                (alice, bob)
            };
            service
                .send_message(
                    SendMessageRequest {
                        recipient_id: to,
                        content: content.to_string(),
                    },
                    from,
                )
                .await
                .unwrap();
        }

        let conversation = service.get_conversation(alice, bob).await.unwrap();
        let contents: Vec<&str> = conversation
            .iter()
            .map(|message| message.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);

        for pair in conversation.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_conversation_excludes_other_pairs() {
        let service = create_message_service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let carol = Uuid::new_v4();

        service
            .send_message(
                SendMessageRequest {
                    recipient_id: bob,
                    content: "for bob".to_string(),
                },
                alice,
            )
            .await
            .unwrap();
        service
            .send_message(
                SendMessageRequest {
                    recipient_id: carol,
                    content: "for carol".to_string(),
                },
                alice,
            )
            .await
            .unwrap();

        let conversation = service.get_conversation(alice, bob).await.unwrap();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation[0].content, "for bob");
    }

    #[tokio::test]
    async fn test_empty_content_rejected() {
        let service = create_message_service();

        let result = service
            .send_message(
                SendMessageRequest {
                    recipient_id: Uuid::new_v4(),
                    content: "   ".to_string(),
                },
                Uuid::new_v4(),
            )
            .await;

        assert!(result.is_err());
        match result.err().unwrap() {
            ApplicationError::Domain(DomainError::InvalidArgument { .. }) => {}
            other => panic!("Expected InvalidArgument error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_recipient_existence_not_checked() {
        // 现网不校验收件人是否存在，保留该宽松行为
        let service = create_message_service();

        let result = service
            .send_message(
                SendMessageRequest {
                    recipient_id: Uuid::new_v4(),
                    content: "into the void".to_string(),
                },
                Uuid::new_v4(),
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_conversation_reads_are_idempotent() {
        let service = create_message_service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        service
            .send_message(
                SendMessageRequest {
                    recipient_id: bob,
                    content: "hello".to_string(),
                },
                alice,
            )
            .await
            .unwrap();

        // 状态未变化时重复读取结果一致
        let first = service.get_conversation(alice, bob).await.unwrap();
        let second = service.get_conversation(alice, bob).await.unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].created_at, second[0].created_at);
    }
}
