pub mod supabase;

pub use supabase::SupabaseAuthClient;
