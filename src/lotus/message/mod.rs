// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use std::str::FromStr;

use cid::Cid;
use serde::{Deserialize, Serialize};

/// The `{"/": "<cid>"}` wrapper Lotus uses for CIDs on the wire. The inner string is passed
/// through as given, so a deal reference does not have to be a parseable CID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CIDMap {
    #[serde(rename = "/")]
    pub cid: String,
}

impl From<&str> for CIDMap {
    fn from(cid: &str) -> Self {
        CIDMap {
            cid: cid.to_string(),
        }
    }
}

impl From<String> for CIDMap {
    fn from(cid: String) -> Self {
        CIDMap { cid }
    }
}

impl From<Cid> for CIDMap {
    fn from(cid: Cid) -> Self {
        CIDMap {
            cid: cid.to_string(),
        }
    }
}

impl TryFrom<CIDMap> for Cid {
    type Error = cid::Error;

    fn try_from(cid_map: CIDMap) -> Result<Self, Self::Error> {
        Cid::from_str(&cid_map.cid)
    }
}

/// The on-chain status of a deal as reported by `Filecoin.ClientGetDealInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DealOnChainStatus {
    /// The label of the deal state, empty if the node could not resolve it.
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cid::Cid;
    use serde_json::json;

    use super::CIDMap;

    const DEAL_CID: &str = "bafy2bzacea4tzhxzh53opjfam734offtlcx7ogg6vyzdkl2v5tyb76s2iivhu";

    #[test]
    fn cid_map_wire_format() {
        let v = serde_json::to_value(CIDMap::from("bagaCID123")).unwrap();
        assert_eq!(v, json!({"/": "bagaCID123"}));

        let m: CIDMap = serde_json::from_value(json!({"/": DEAL_CID})).unwrap();
        assert_eq!(m.cid, DEAL_CID);
    }

    #[test]
    fn cid_map_from_cid() {
        let cid = Cid::from_str(DEAL_CID).unwrap();
        let m = CIDMap::from(cid);
        assert_eq!(m.cid, DEAL_CID);
        assert_eq!(Cid::try_from(m).unwrap(), cid);
    }

    #[test]
    fn unparseable_cid_map() {
        assert!(Cid::try_from(CIDMap::from("bagaCID123")).is_err());
    }
}
