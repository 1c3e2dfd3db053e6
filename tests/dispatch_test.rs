use chrono::NaiveDate;
use order_tracker::clients::{MachineClient, OrderClient};
use order_tracker::framework::mock::MockClient;
use order_tracker::framework::FrameworkError;
use order_tracker::machine_store::{self, MachineStore};
use order_tracker::model::{MachineId, MachineStatus, Order, OrderId, Process};
use order_tracker::order_store::{OrderError, OrderStore, OrderView};
use order_tracker::outcome::AssignOutcome;

fn approved_order(id: &str) -> Order {
    Order::new(id, "Acme", NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()).with_process(
        Process::new("P-1", "Laser cut", "Dana", "2mm sheet", "cut blanks"),
    )
}

/// Real machine actor, scripted order actor: dispatch whatever the order side
/// reports as approved onto the first idle machine.
#[tokio::test]
async fn test_dispatch_approved_orders_with_mocked_order_actor() {
    let mut order_mock = MockClient::<OrderStore>::new();
    order_mock
        .expect_query()
        .return_ok(OrderView::Orders(vec![approved_order("ORD-5")]));
    let orders = OrderClient::new(order_mock.client());

    let (machine_actor, machine_client) = machine_store::new(MachineStore::default(), 8);
    let actor_handle = tokio::spawn(machine_actor.run());
    let machines = MachineClient::new(machine_client);

    for order in orders.approved_orders().await.unwrap() {
        let idle = machines.available_machines().await.unwrap();
        let outcome = machines
            .assign_work(idle[0].id.clone(), &order, &order.sub_tasks[0], "Alice")
            .await
            .unwrap();
        assert_eq!(outcome, AssignOutcome::Assigned);
    }

    let machine = machines
        .find_machine(MachineId::from("M-CNC-01"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(machine.status(), MachineStatus::Busy);
    assert_eq!(machine.current_order().unwrap().order_id, OrderId::from("ORD-5"));
    assert_eq!(machines.available_machines().await.unwrap().len(), 3);

    order_mock.verify();
    drop(machines);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_order_actor_failure_surfaces_to_caller() {
    let mut order_mock = MockClient::<OrderStore>::new();
    order_mock.expect_query().return_err(FrameworkError::ActorClosed);
    let orders = OrderClient::new(order_mock.client());

    let result = orders.approved_orders().await;
    assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    order_mock.verify();
}
