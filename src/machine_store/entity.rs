use super::actions::{MachineActionResult, MachineCommand, MachineQuery, MachineView};
use super::store::MachineStore;
use crate::framework::ActorStore;

impl ActorStore for MachineStore {
    type Command = MachineCommand;
    type Outcome = MachineActionResult;
    type Query = MachineQuery;
    type View = MachineView;

    fn execute(&mut self, command: MachineCommand) -> MachineActionResult {
        match command {
            MachineCommand::Assign {
                machine_id,
                order,
                process,
                operator,
            } => MachineActionResult::Assign(self.assign_work(
                &machine_id,
                &order,
                &process,
                &operator,
            )),
            MachineCommand::Complete(machine_id) => {
                MachineActionResult::Complete(self.complete_work(&machine_id))
            }
            MachineCommand::SetMaintenance(machine_id) => {
                MachineActionResult::SetMaintenance(self.set_maintenance(&machine_id))
            }
        }
    }

    fn query(&self, query: MachineQuery) -> MachineView {
        match query {
            MachineQuery::All => MachineView::Machines(self.all_machines().to_vec()),
            MachineQuery::Available => {
                MachineView::Machines(self.available_machines().into_iter().cloned().collect())
            }
            MachineQuery::Find(machine_id) => {
                MachineView::Machine(self.find_machine(&machine_id).cloned())
            }
        }
    }
}
