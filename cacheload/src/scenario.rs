//! The `/cache` workload.
//!
//! Declares a single scenario, `RequestTest`, with one transaction, `local_test`, which sends the
//! fixed payload from [`crate::payload`] to the target's `/cache` endpoint. Goose records the
//! outcome of every request; the transaction itself never looks at the response.

use goose::prelude::*;

use crate::payload;

/// Name of the scenario registered by [`request_test`].
pub const SCENARIO_NAME: &str = "RequestTest";

/// Name of the only transaction of the scenario.
pub const TRANSACTION_NAME: &str = "local_test";

/// The path requested by [`local_test`].
pub const CACHE_PATH: &str = "/cache";

/// Sends `GET /cache` with the body `{"body": <payload>}`.
pub async fn local_test(user: &mut GooseUser) -> TransactionResult {
    let request_builder = user
        .get_request_builder(&GooseMethod::Get, CACHE_PATH)?
        .header("content-type", "application/json")
        .body(payload::encoded_body());

    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(CACHE_PATH)
        .set_request_builder(request_builder)
        .build();
    let _goose = user.request(goose_request).await?;

    Ok(())
}

/// Initializes the payload and returns the scenario of this workload.
pub fn request_test() -> Result<Scenario, GooseError> {
    payload::init();

    let transaction = transaction!(local_test)
        .set_name(TRANSACTION_NAME)
        .set_weight(1)?;
    Ok(scenario!(SCENARIO_NAME).register_transaction(transaction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_local_test() {
        let scenario = request_test().unwrap();

        assert_eq!(scenario.name, "RequestTest");
        assert_eq!(scenario.transactions.len(), 1);
        assert_eq!(scenario.transactions[0].name, "local_test");
        assert_eq!(scenario.transactions[0].weight, 1);
    }

    #[test]
    fn rejects_zero_weight() {
        assert!(transaction!(local_test).set_weight(0).is_err());
    }
}
