// Remote text generation: trait-based abstraction over the chat-completion API.
//
// The TextGenerator trait defines the interface. OpenAiClient implements it
// over HTTP, paced by a fixed-interval RateLimiter. Tests swap in an
// in-process generator without touching the pipelines.

pub mod openai;
pub mod rate_limiter;
pub mod traits;
