use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_notify_impl::NotifierServiceImpl;
use folio_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, ContactFeature>;

// Notify
pub type Notifier = NotifierServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Notifier>;
pub type HealthFeature = HealthFeatureServiceImpl<Time>;
