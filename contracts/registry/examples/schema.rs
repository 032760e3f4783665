use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use vns::registry::{
    AdminResponse, ClaimableResponse, ExecuteMsg, InstantiateMsg, IsAvailableResponse,
    LockDurationResponse, MigrateMsg, OrderCursor, OrderSequenceResponse, OrdersResponse,
    PricePerCharResponse, QueryMsg, RecordResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(OrderCursor), &out_dir);
    export_schema(&schema_for!(RecordResponse), &out_dir);
    export_schema(&schema_for!(IsAvailableResponse), &out_dir);
    export_schema(&schema_for!(OrdersResponse), &out_dir);
    export_schema(&schema_for!(ClaimableResponse), &out_dir);
    export_schema(&schema_for!(OrderSequenceResponse), &out_dir);
    export_schema(&schema_for!(AdminResponse), &out_dir);
    export_schema(&schema_for!(PricePerCharResponse), &out_dir);
    export_schema(&schema_for!(LockDurationResponse), &out_dir);
}
