// Shared primitives for driving the widget against a scripted backend
// over a real socket.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{Value, json};

use booking_widget::domain::checkout::{CheckoutOutcome, CheckoutRequest, PaymentConfirmation};
use booking_widget::domain::ports::{CheckoutGateway, Clock};

// Booking and payment services behind one router, with scripted replies
// per endpoint. Reservation bodies are recorded verbatim so tests can
// pin the wire format.
pub struct StubBackend {
    availability: (StatusCode, Value),
    reserve: (StatusCode, Value),
    create_order: (StatusCode, Value),
    reserve_bodies: Mutex<Vec<Value>>,
    order_calls: AtomicUsize,
}

impl StubBackend {
    // One Deluxe Suite, reservable and payable.
    pub fn happy() -> Self {
        Self {
            availability: (
                StatusCode::OK,
                json!({
                    "status": "AVAILABLE",
                    "rooms": [
                        {"roomId": 7, "name": "Deluxe Suite", "price": 2000.0, "availableCount": 3}
                    ]
                }),
            ),
            reserve: (StatusCode::OK, json!({"bookingId": 41, "amount": 6000.0})),
            create_order: (
                StatusCode::OK,
                json!({"orderId": "order_xyz", "razorpayKeyId": "rzp_test_k"}),
            ),
            reserve_bodies: Mutex::new(Vec::new()),
            order_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_availability(mut self, status: StatusCode, body: Value) -> Self {
        self.availability = (status, body);
        self
    }

    pub fn with_reserve(mut self, status: StatusCode, body: Value) -> Self {
        self.reserve = (status, body);
        self
    }

    pub fn with_create_order(mut self, status: StatusCode, body: Value) -> Self {
        self.create_order = (status, body);
        self
    }

    pub fn reserve_bodies(&self) -> Vec<Value> {
        self.reserve_bodies
            .lock()
            .expect("reserve bodies mutex poisoned")
            .clone()
    }

    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }
}

async fn check_availability(State(stub): State<Arc<StubBackend>>) -> (StatusCode, Json<Value>) {
    let (status, body) = stub.availability.clone();
    (status, Json(body))
}

async fn reserve(
    State(stub): State<Arc<StubBackend>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.reserve_bodies
        .lock()
        .expect("reserve bodies mutex poisoned")
        .push(body);
    let (status, body) = stub.reserve.clone();
    (status, Json(body))
}

async fn create_order(State(stub): State<Arc<StubBackend>>) -> (StatusCode, Json<Value>) {
    stub.order_calls.fetch_add(1, Ordering::SeqCst);
    let (status, body) = stub.create_order.clone();
    (status, Json(body))
}

// Serve the stub on an ephemeral port and return the base URL. The
// listener is bound before the serve task spawns, so requests queue in
// the accept backlog and no readiness polling is needed.
pub async fn spawn(stub: Arc<StubBackend>) -> String {
    let app = Router::new()
        .route("/api/bookings/check-availability", post(check_availability))
        .route("/api/bookings/reserve", post(reserve))
        .route("/api/payment/create-order", post(create_order))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend failed");
    });

    format!("http://{addr}")
}

// Gateway fake with a scripted outcome; completions mirror the order id
// they were opened with.
#[derive(Clone)]
pub struct ScriptedGateway {
    completion: Option<(String, String)>,
    requests: Arc<Mutex<Vec<CheckoutRequest>>>,
}

impl ScriptedGateway {
    pub fn completing(payment_id: &str, signature: &str) -> Self {
        Self {
            completion: Some((payment_id.to_string(), signature.to_string())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn dismissing() -> Self {
        Self {
            completion: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests
            .lock()
            .expect("checkout requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl CheckoutGateway for ScriptedGateway {
    async fn collect(&self, request: &CheckoutRequest) -> CheckoutOutcome {
        self.requests
            .lock()
            .expect("checkout requests mutex poisoned")
            .push(request.clone());
        match &self.completion {
            Some((payment_id, signature)) => CheckoutOutcome::Completed(PaymentConfirmation {
                order_id: request.order_id.clone(),
                payment_id: payment_id.clone(),
                signature: signature.clone(),
            }),
            None => CheckoutOutcome::Dismissed,
        }
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
