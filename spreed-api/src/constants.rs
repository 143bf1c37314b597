//! Endpoint paths, headers and capability names

/// Capabilities endpoint, shared by all Nextcloud apps
pub const CAPABILITIES_PATH: &str = "/ocs/v2.php/cloud/capabilities";

/// Root of the v4 conversations API
pub const ROOMS_API_PATH: &str = "/ocs/v2.php/apps/spreed/api/v4";

/// Root of the v1 chat API
pub const CHAT_API_PATH: &str = "/ocs/v2.php/apps/spreed/api/v1";

/// Header marking a request as OCS-aware, required on every call
pub const OCS_API_REQUEST_HEADER: &str = "OCS-APIRequest";

/// Response header carrying the offset for the next history page
pub const CHAT_LAST_GIVEN_HEADER: &str = "X-Chat-Last-Given";

/// Response header carrying the last commonly read message id
pub const CHAT_LAST_COMMON_READ_HEADER: &str = "X-Chat-Last-Common-Read";

/// Capability gating the v4 conversations API
pub const CAPABILITY_CONVERSATION_V4: &str = "conversation-v4";

/// Capability gating the v1 chat API
pub const CAPABILITY_CHAT_V2: &str = "chat-v2";

/// Capability for setting room descriptions
pub const CAPABILITY_ROOM_DESCRIPTION: &str = "room-description";

/// Capability for read-only rooms
pub const CAPABILITY_READ_ONLY_ROOMS: &str = "read-only-rooms";

/// Capability for listable rooms
pub const CAPABILITY_LISTABLE_ROOMS: &str = "listable-rooms";

/// Capability for user favorites
pub const CAPABILITY_FAVORITES: &str = "favorites";

/// Capability for clearing chat history
pub const CAPABILITY_CLEAR_HISTORY: &str = "clear-history";

/// Capability for deleting chat messages
pub const CAPABILITY_DELETE_MESSAGES: &str = "delete-messages";

/// Capability for sharing rich objects into a chat
pub const CAPABILITY_RICH_OBJECT_SHARING: &str = "rich-object-sharing";

/// Default number of messages per history page
pub const DEFAULT_MESSAGE_LIMIT: u32 = 100;

/// Maximum number of messages per history page the server accepts
pub const MAX_MESSAGE_LIMIT: u32 = 200;
