#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
mod token {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    /// Fixed-point precision of every `Balance` held by the ledger.
    pub const DECIMALS: u8 = 18;

    /// One whole token expressed in base units.
    pub const UNIT: Balance = Balance::pow(10, DECIMALS as u32);

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Debited account holds less than the requested amount.
        InsufficientBalance,
        /// Spender's remaining allowance is below the requested amount.
        InsufficientAllowance,
        /// Recipient or spender is the zero account.
        ZeroAddress,
        Overflow,
    }

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(storage)]
    pub struct Token {
        // metadata
        name: String,
        symbol: String,

        // ledger state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    /// The all-zero account, never a valid recipient or spender.
    pub fn zero_address() -> AccountId {
        AccountId::from([0x00; 32])
    }

    impl Token {
        /// Mints `initial_supply` whole tokens to the deployer.
        #[ink(constructor)]
        pub fn new(name: String, symbol: String, initial_supply: Balance) -> Result<Self> {
            let total_supply = initial_supply.checked_mul(UNIT).ok_or(Error::Overflow)?;
            let deployer = Self::env().caller();

            let mut balances = Mapping::default();
            balances.insert(&deployer, &total_supply);

            Self::env().emit_event(Transfer {
                from: zero_address(),
                to: deployer,
                value: total_supply,
            });

            Ok(Self {
                name,
                symbol,
                total_supply,
                balances,
                allowances: Mapping::default(),
            })
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        /// Returns 0 for accounts that never held tokens.
        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            self.balances.get(&owner).unwrap_or(0)
        }

        /// Amount `spender` may still move out of `owner`'s balance.
        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get(&(owner, spender)).unwrap_or(0)
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<()> {
            let from = self.env().caller();
            self.move_balance(from, to, value)
                .map_err(|err| rejected("transfer", err))
        }

        /// Overwrites the caller's allowance for `spender`; it does not add to it.
        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<()> {
            if spender == zero_address() {
                return Err(rejected("approve", Error::ZeroAddress))
            }
            let owner = self.env().caller();
            self.allowances.insert(&(owner, spender), &value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        /// Moves `value` from `from` to `to` on the caller's allowance.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<()> {
            let spender = self.env().caller();
            self.spend_allowance(from, spender, to, value)
                .map_err(|err| rejected("transfer_from", err))
        }

        // ---- internals ----

        fn spend_allowance(
            &mut self,
            from: AccountId,
            spender: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<()> {
            if to == zero_address() {
                return Err(Error::ZeroAddress)
            }
            if self.balance_of(from) < value {
                return Err(Error::InsufficientBalance)
            }
            let new_allowance = self
                .allowance(from, spender)
                .checked_sub(value)
                .ok_or(Error::InsufficientAllowance)?;

            self.move_balance(from, to, value)?;
            self.allowances.insert(&(from, spender), &new_allowance);
            Ok(())
        }

        /// All checks run before the first write, so an `Err` leaves storage untouched.
        fn move_balance(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<()> {
            if to == zero_address() {
                return Err(Error::ZeroAddress)
            }
            let new_from = self
                .balance_of(from)
                .checked_sub(value)
                .ok_or(Error::InsufficientBalance)?;

            if from != to {
                let new_to = self.balance_of(to).checked_add(value).ok_or(Error::Overflow)?;
                self.balances.insert(&from, &new_from);
                self.balances.insert(&to, &new_to);
            }

            self.env().emit_event(Transfer { from, to, value });
            Ok(())
        }
    }

    fn rejected(op: &str, err: Error) -> Error {
        ink::env::debug_println!("{} rejected: {:?}", op, err);
        err
    }


}
