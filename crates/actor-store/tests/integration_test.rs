use actor_store::{ActorEntity, FrameworkError, ResourceActor, WorkerPool};
use async_trait::async_trait;
use std::time::Duration;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: Option<u64>,
    title: String,
    state: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Ticket title must not be blank")]
struct BlankTitle;

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u64;
    type Error = BlankTitle;

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = Some(id);
    }

    async fn on_save(&mut self) -> Result<(), BlankTitle> {
        if self.title.trim().is_empty() {
            return Err(BlankTitle);
        }
        Ok(())
    }
}

fn ticket(title: &str) -> Ticket {
    Ticket {
        id: None,
        title: title.into(),
        state: "OPEN".into(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Insert
    let created = client.save(ticket("Leaky tap")).await.unwrap();
    assert_eq!(created.id, Some(1));

    // 2. Replace
    let mut edited = created.clone();
    edited.state = "CLOSED".into();
    let replaced = client.save(edited).await.unwrap();
    assert_eq!(replaced.id, Some(1));
    assert_eq!(client.get(1).await.unwrap().unwrap().state, "CLOSED");

    // 3. Hook rejects the write
    let rejected = client.save(ticket("   ")).await;
    match rejected {
        Err(FrameworkError::EntityError(e)) => assert!(e.downcast_ref::<BlankTitle>().is_some()),
        other => panic!("expected entity error, got {:?}", other),
    }

    // 4. Delete
    client.delete(1).await.unwrap();
    assert!(client.get(1).await.unwrap().is_none());
    assert!(client.ids().await.unwrap().is_empty());

    // 5. Shutdown once the last client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    drop(actor);

    assert!(matches!(client.ids().await, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_pool_fans_out_over_store() {
    let (actor, client) = ResourceActor::new(32);
    tokio::spawn(actor.run());
    let (pool, workers) = WorkerPool::spawn(3);

    for n in 0..12 {
        client.save(ticket(&format!("ticket {n}"))).await.unwrap();
    }

    let handles: Vec<_> = client
        .ids()
        .await
        .unwrap()
        .into_iter()
        .map(|id| {
            let client = client.clone();
            workers.submit(move |_| async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                let mut ticket = client.get(id).await.ok().flatten()?;
                ticket.state = "TRIAGED".into();
                client.save(ticket).await.ok()
            })
        })
        .collect();

    let mut triaged = 0;
    for handle in handles {
        if let Ok(Some(ticket)) = handle.join().await {
            assert_eq!(ticket.state, "TRIAGED");
            triaged += 1;
        }
    }
    assert_eq!(triaged, 12);

    let all = client.list().await.unwrap();
    assert!(all.iter().all(|t| t.state == "TRIAGED"));

    pool.shutdown().await.unwrap();
}
