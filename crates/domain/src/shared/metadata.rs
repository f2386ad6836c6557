use std::collections::HashMap;

/// Free form key value pairs attached to notification content. Schedulers
/// are not required to round trip these, so nothing may depend on them
/// being present on a `PendingTrigger`.
pub type Metadata = HashMap<String, String>;
