use chrono::NaiveDate;
use order_tracker::clients::actor_client::ActorClient;
use order_tracker::config::{DispatchPolicy, TrackerConfig};
use order_tracker::lifecycle::TrackerSystem;
use order_tracker::model::{
    Alert, AlertSeverity, AlertStatus, AuditStatus, MachineId, MachineStatus, Order, OrderId,
    Process,
};
use order_tracker::order_store::{OrderQuery, OrderView};
use order_tracker::outcome::{AssignOutcome, AuditOutcome, Outcome};

fn order(id: &str) -> Order {
    Order::new(id, "Acme", NaiveDate::from_ymd_opt(2026, 6, 30).unwrap())
}

fn process(id: &str) -> Process {
    Process::new(id, "Rough milling", "Bob", "bar stock", "milled blank")
}

/// Full flow through real actors: submit, approve, dispatch, complete.
#[tokio::test]
async fn test_order_to_machine_scenario() {
    let system = TrackerSystem::new(&TrackerConfig::default()).unwrap();
    let orders = &system.order_client;
    let machines = &system.machine_client;

    orders
        .add_order(order("ORD-1").with_process(process("P-1")))
        .await
        .expect("Failed to add order");
    assert_eq!(orders.pending_orders().await.unwrap().len(), 1);

    let outcome = orders.approve_order("ORD-1".into()).await.unwrap();
    assert_eq!(outcome, AuditOutcome::Applied);
    assert!(orders.pending_orders().await.unwrap().is_empty());

    let approved = orders.approved_orders().await.unwrap();
    assert_eq!(approved.len(), 1);
    let approved = &approved[0];
    assert_eq!(approved.order_id, OrderId::from("ORD-1"));
    assert_eq!(approved.audit_status(), AuditStatus::Approved);
    assert_eq!(approved.audit_logs().len(), 1);
    assert_eq!(approved.audit_logs()[0].action, "approved");

    let step = &approved.sub_tasks[0];
    let outcome = machines
        .assign_work("M-CNC-01".into(), approved, step, "Alice")
        .await
        .unwrap();
    assert_eq!(outcome, AssignOutcome::Assigned);

    let machine = machines
        .find_machine("M-CNC-01".into())
        .await
        .unwrap()
        .expect("Machine not found");
    assert_eq!(machine.status(), MachineStatus::Busy);
    assert_eq!(machine.task_history()[0].operator, "Alice");
    assert_eq!(machine.current_sub_task().unwrap().id, step.id);

    let outcome = machines.complete_work("M-CNC-01".into()).await.unwrap();
    assert_eq!(outcome, Outcome::Applied);

    let machine = machines.find_machine("M-CNC-01".into()).await.unwrap().unwrap();
    assert_eq!(machine.status(), MachineStatus::Idle);
    assert!(machine.current_order().is_none());
    assert_eq!(machine.task_history().len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

/// Racing reviewers: exactly one decision applies.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_review_is_serialized() {
    let system = TrackerSystem::new(&TrackerConfig::default()).unwrap();
    for i in 0..10 {
        system.order_client.add_order(order(&format!("ORD-{i}"))).await.unwrap();
    }

    let mut tasks = Vec::new();
    for i in 0..10 {
        let approver = system.order_client.clone();
        let rejecter = system.order_client.clone();
        let id = OrderId(format!("ORD-{i}"));
        let approve_id = id.clone();
        tasks.push(tokio::spawn(async move { approver.approve_order(approve_id).await }));
        tasks.push(tokio::spawn(async move { rejecter.reject_order(id, None).await }));
    }

    let mut applied = 0;
    let mut already_decided = 0;
    for task in tasks {
        match task.await.unwrap().unwrap() {
            AuditOutcome::Applied => applied += 1,
            AuditOutcome::AlreadyDecided(_) => already_decided += 1,
            AuditOutcome::NotFound => panic!("order vanished"),
        }
    }
    assert_eq!(applied, 10);
    assert_eq!(already_decided, 10);

    let approved = system.order_client.approved_orders().await.unwrap();
    let rejected = system.order_client.rejected_orders().await.unwrap();
    assert_eq!(approved.len() + rejected.len(), 10);
    for order in approved.iter().chain(&rejected) {
        assert_eq!(order.audit_logs().len(), 1);
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_history_survives_later_order_edits() {
    let system = TrackerSystem::new(&TrackerConfig::default()).unwrap();
    let mut live = order("ORD-7").with_process(process("P-1"));
    let step = live.sub_tasks[0].clone();

    let _ = system
        .machine_client
        .assign_work("M-LSR-01".into(), &live, &step, "Alice")
        .await
        .unwrap();

    live.remark = Some("expedite".to_string());
    let alert = Alert::new(
        live.order_id.clone(),
        step.id.clone(),
        AlertSeverity::Warn,
        "bar stock late",
    );
    live.process_mut(&step.id).unwrap().attach_alert(alert);

    let machine = system
        .machine_client
        .find_machine("M-LSR-01".into())
        .await
        .unwrap()
        .unwrap();
    let entry = &machine.task_history()[0];
    assert!(entry.order_context.remark.is_none());
    assert!(entry.order_context.sub_tasks[0].alerts().is_empty());
    assert!(machine.current_order().unwrap().remark.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_maintenance_policy_from_config() {
    let mut config = TrackerConfig::default();
    let system = TrackerSystem::new(&config).unwrap();
    let _ = system
        .machine_client
        .assign_work("M-CNC-02".into(), &order("ORD-1"), &process("P-1"), "Alice")
        .await
        .unwrap();
    let _ = system.machine_client.set_maintenance("M-CNC-02".into()).await.unwrap();
    let machine = system
        .machine_client
        .find_machine("M-CNC-02".into())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(machine.status(), MachineStatus::OnRepair);
    assert!(machine.current_work().is_some());
    system.shutdown().await.unwrap();

    config.dispatch = DispatchPolicy {
        clear_work_on_maintenance: true,
        ..DispatchPolicy::default()
    };
    let system = TrackerSystem::new(&config).unwrap();
    let _ = system
        .machine_client
        .assign_work("M-CNC-02".into(), &order("ORD-1"), &process("P-1"), "Alice")
        .await
        .unwrap();
    let _ = system.machine_client.set_maintenance("M-CNC-02".into()).await.unwrap();
    let machine = system
        .machine_client
        .find_machine("M-CNC-02".into())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(machine.status(), MachineStatus::OnRepair);
    assert!(machine.current_work().is_none());
    let idle: Vec<MachineId> = system
        .machine_client
        .available_machines()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert!(!idle.contains(&MachineId::from("M-CNC-02")));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_and_raw_queries() {
    let system = TrackerSystem::new(&TrackerConfig::default()).unwrap();
    let orders = &system.order_client;

    orders.add_order(order("A")).await.unwrap();
    orders.add_order(order("B")).await.unwrap();
    let _ = orders.reject_order("A".into(), Some("no drawings".to_string())).await.unwrap();

    let view = orders.query(OrderQuery::Pending).await.unwrap();
    match view {
        OrderView::Orders(pending) => assert_eq!(pending[0].order_id, OrderId::from("B")),
        other => panic!("unexpected view {other:?}"),
    }
    assert_eq!(
        orders.audit_status_of("A".into()).await.unwrap(),
        Some(AuditStatus::Rejected)
    );

    assert_eq!(orders.delete_order("A".into()).await.unwrap(), Outcome::Applied);
    assert_eq!(orders.delete_order("A".into()).await.unwrap(), Outcome::NotFound);
    assert_eq!(orders.find_order("A".into()).await.unwrap(), None);
    assert_eq!(
        orders.approve_order("A".into()).await.unwrap(),
        AuditOutcome::NotFound
    );

    system.shutdown().await.unwrap();
}

#[test]
fn test_alert_lifecycle() {
    let mut alert = Alert::new("ORD-1", "P-1", AlertSeverity::Critical, "spindle overheating");
    assert_eq!(alert.status(), AlertStatus::Active);
    alert.acknowledge().unwrap();
    alert.resolve().unwrap();
    assert!(alert.resolved_at().is_some());
    assert!(alert.acknowledge().is_err());
}
