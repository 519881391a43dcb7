/*
 * Responsibility
 * - Wire types + unary client stubs for the two upstream gRPC services
 * - Hand-maintained prost modules (same shape tonic-build emits), kept in
 *   sync with the upstream service contracts
 */
pub mod authentication;
pub mod product;
