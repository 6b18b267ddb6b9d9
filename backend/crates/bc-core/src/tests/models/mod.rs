mod club;
mod membership_context;
