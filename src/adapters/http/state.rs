//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::{
    AcceptProposalHandler, ApproveMilestoneHandler, CheckoutUrls, ClientRecords,
    CreateCheckoutHandler, EstimateQuoteHandler, GetProposalHandler, JoinWaitlistHandler,
    LoadDashboardHandler, SendContactHandler, SubmitLeadHandler,
};
use crate::domain::dashboard::DashboardOptions;
use crate::domain::pricing::PricingTable;
use crate::ports::{ClientStorage, LeadRelay, PaymentProvider};

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_BOOKING_URL: &str = "https://calendly.com";

/// Shared application state containing all dependencies.
///
/// Cloned for each request; ports are Arc-wrapped and handlers are built on
/// demand from them.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ClientStorage>,
    records: ClientRecords,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub relay: Arc<dyn LeadRelay>,
    pub pricing: PricingTable,
    pub checkout_urls: CheckoutUrls,
    pub dashboard_options: DashboardOptions,
    pub booking_url: String,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn ClientStorage>,
        payment_provider: Arc<dyn PaymentProvider>,
        relay: Arc<dyn LeadRelay>,
    ) -> Self {
        Self {
            records: ClientRecords::new(Arc::clone(&storage)),
            storage,
            payment_provider,
            relay,
            pricing: PricingTable::default(),
            checkout_urls: CheckoutUrls::from_base(DEFAULT_PUBLIC_BASE_URL),
            dashboard_options: DashboardOptions::default(),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }

    pub fn with_public_base_url(mut self, public_base_url: &str) -> Self {
        self.checkout_urls = CheckoutUrls::from_base(public_base_url);
        self
    }

    pub fn with_dashboard_options(mut self, options: DashboardOptions) -> Self {
        self.dashboard_options = options;
        self
    }

    pub fn with_booking_url(mut self, booking_url: impl Into<String>) -> Self {
        self.booking_url = booking_url.into();
        self
    }

    /// Shared across requests so per-client locks are shared too.
    fn records(&self) -> ClientRecords {
        self.records.clone()
    }

    pub fn estimate_quote_handler(&self) -> EstimateQuoteHandler {
        EstimateQuoteHandler::new(self.pricing.clone())
    }

    pub fn submit_lead_handler(&self) -> SubmitLeadHandler {
        SubmitLeadHandler::new(
            self.pricing.clone(),
            self.records(),
            self.relay.clone(),
            self.booking_url.clone(),
        )
    }

    pub fn get_proposal_handler(&self) -> GetProposalHandler {
        GetProposalHandler::new(self.records())
    }

    pub fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(
            self.payment_provider.clone(),
            self.records(),
            self.checkout_urls.clone(),
        )
    }

    pub fn accept_proposal_handler(&self) -> AcceptProposalHandler {
        AcceptProposalHandler::new(self.records(), self.create_checkout_handler())
    }

    pub fn load_dashboard_handler(&self) -> LoadDashboardHandler {
        LoadDashboardHandler::new(self.records(), self.dashboard_options.clone())
    }

    pub fn approve_milestone_handler(&self) -> ApproveMilestoneHandler {
        ApproveMilestoneHandler::new(self.records())
    }

    pub fn send_contact_handler(&self) -> SendContactHandler {
        SendContactHandler::new(self.relay.clone())
    }

    pub fn join_waitlist_handler(&self) -> JoinWaitlistHandler {
        JoinWaitlistHandler::new(self.relay.clone())
    }
}
