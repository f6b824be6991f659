use cosmwasm_std::{Addr, Timestamp, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Sets (or replaces) the allocation of `beneficiary`. Owner only.
    AddBeneficiary {
        beneficiary: String,
        amount: Uint128,
    },
    /// Drops the allocation of `beneficiary`. Owner only.
    RemoveBeneficiary { beneficiary: String },
    /// Marks the owner deceased and sets when allocations unlock. Owner only.
    DeclareDeceased { unlock_time: Timestamp },
    /// Pays the sender's allocation out of the estate.
    TransferAssets {},
    /// Adds the attached funds to the estate.
    Deposit {},
    Pause {},
    Unpause {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    Beneficiary {
        address: String,
    },
    Beneficiaries {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    DeceasedStatus {},
    Paused {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Addr,
    pub denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BeneficiaryResponse {
    pub beneficiary: Addr,
    pub amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BeneficiaryListResponse {
    pub beneficiaries: Vec<BeneficiaryResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeceasedStatusResponse {
    pub is_deceased: bool,
    pub unlock_time: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PausedResponse {
    pub paused: bool,
}
