use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use herbtrace_db::models::harvest::{
    CollectionEvent, EnvironmentalConditions, FarmingInputs, LatLong, PermitCompliance,
};
use herbtrace_db::repository::transaction_context::{KeyValue, StateQueryIterator, TransactionContext};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn create_test_collection_event(batch_id: &str) -> CollectionEvent {
    CollectionEvent {
        batch_id: batch_id.to_string(),
        actor_id: "farmer-1".to_string(),
        crop_id: "turmeric".to_string(),
        location: LatLong::new(12.9, 77.6),
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        harvest_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        environment: None,
        inputs: None,
        permits: Vec::new(),
    }
}

/// Record with every optional section populated
pub fn create_full_collection_event(batch_id: &str) -> CollectionEvent {
    let mut event = create_test_collection_event(batch_id);
    event.location.address = Some("Erode, Tamil Nadu".to_string());
    event.environment = Some(EnvironmentalConditions {
        soil_quality: Some("loamy".to_string()),
        moisture: Some(23.4),
        temperature: Some(29.1),
        humidity: Some(64.0),
        weather_conditions: Some("clear".to_string()),
        irrigation_method: Some("drip".to_string()),
    });
    event.inputs = Some(FarmingInputs {
        fertilizers: Some("vermicompost".to_string()),
        pesticides_used: None,
        organic_certified: true,
    });
    event.permits = vec![
        PermitCompliance {
            permit_id: "PERMIT-1".to_string(),
            permit_type: "cultivation".to_string(),
            issuer: "state-agri-dept".to_string(),
            valid_until: Some("2025-12-31".to_string()),
        },
        PermitCompliance {
            permit_id: "PERMIT-2".to_string(),
            permit_type: "organic".to_string(),
            issuer: "npop".to_string(),
            valid_until: None,
        },
    ];
    event
}

pub fn to_payload(event: &CollectionEvent) -> String {
    serde_json::to_string(event).unwrap()
}

/// Which store call a [`FaultyTransactionContext`] fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Get,
    Put,
    Range,
    /// The range opens and yields one good entry, then the next call fails
    Next,
}

/// Transaction context whose store calls fail on demand
pub struct FaultyTransactionContext {
    pub fault: Fault,
    /// Close calls made on iterators handed out by this context
    pub closes: Arc<AtomicUsize>,
}

impl FaultyTransactionContext {
    pub fn new(fault: Fault) -> Self {
        Self {
            fault,
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionContext for FaultyTransactionContext {
    fn tx_id(&self) -> &str {
        "faulty-tx"
    }

    async fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>, Box<dyn Error + Send + Sync>> {
        match self.fault {
            Fault::Get => Err("storage layer unavailable".into()),
            _ => Ok(None),
        }
    }

    async fn put_state(&self, _key: &str, _value: Vec<u8>) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self.fault {
            Fault::Put => Err("storage layer unavailable".into()),
            _ => Ok(()),
        }
    }

    async fn get_state_by_range(
        &self,
        _start_key: &str,
        _end_key: &str,
    ) -> Result<Box<dyn StateQueryIterator>, Box<dyn Error + Send + Sync>> {
        match self.fault {
            Fault::Next => Ok(Box::new(FailingIterator {
                yielded: false,
                closes: self.closes.clone(),
            })),
            _ => Err("storage layer unavailable".into()),
        }
    }
}

/// Yields one decodable entry, then fails
struct FailingIterator {
    yielded: bool,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl StateQueryIterator for FailingIterator {
    async fn next(&mut self) -> Result<Option<KeyValue>, Box<dyn Error + Send + Sync>> {
        if self.yielded {
            return Err("disk gone".into());
        }
        self.yielded = true;
        Ok(Some(KeyValue {
            key: "A".to_string(),
            value: create_test_collection_event("A").to_ledger_bytes()?,
        }))
    }

    fn close(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
