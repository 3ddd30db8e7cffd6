mod repository;
mod supabase;

pub use repository::VectorStore;
pub use supabase::SupabaseStore;

#[cfg(test)]
pub use repository::MockVectorStore;
