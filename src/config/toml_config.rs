use crate::core::bank::Bank;
use crate::core::registry::Registry;
use crate::domain::account::{
    Account, AccountKind, TrustTerms, DEFAULT_CHECKING_FEE, DEFAULT_INTEREST_RATE,
};
use crate::domain::school::{Course, Instructor, Student};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_range, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional startup file for both programs. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bank: BankConfig,
    pub school: SchoolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub checking_fee: f64,
    pub trust: TrustTerms,
    pub accounts: Vec<AccountSeed>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountSeedKind {
    Basic,
    Savings,
    Checking,
    Trust,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSeed {
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub balance: f64,
    pub kind: AccountSeedKind,
    /// Savings and trust only; defaults to 3%.
    pub interest_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub instructors: Vec<Instructor>,
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
}

impl AccountSeed {
    fn new(name: &str, password: &str, balance: f64, kind: AccountSeedKind, rate: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            password: password.to_string(),
            balance,
            kind,
            interest_rate: rate,
        }
    }

    fn interest_rate(&self) -> f64 {
        self.interest_rate.unwrap_or(DEFAULT_INTEREST_RATE)
    }

    pub fn to_account(&self, checking_fee: f64, terms: TrustTerms) -> Account {
        let kind = match self.kind {
            AccountSeedKind::Basic => AccountKind::Basic,
            AccountSeedKind::Savings => AccountKind::Savings {
                interest_rate: self.interest_rate(),
            },
            AccountSeedKind::Checking => AccountKind::Checking { fee: checking_fee },
            AccountSeedKind::Trust => AccountKind::Trust {
                interest_rate: self.interest_rate(),
                withdrawals: 0,
                terms,
            },
        };
        Account::new(&self.name, &self.password, self.balance, kind)
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            checking_fee: DEFAULT_CHECKING_FEE,
            trust: TrustTerms::default(),
            accounts: vec![
                AccountSeed::new("Yousef", "0000", 3000.0, AccountSeedKind::Savings, Some(4.5)),
                AccountSeed::new("Hana", "1111", 1500.0, AccountSeedKind::Checking, None),
                AccountSeed::new("Kareem", "2222", 8000.0, AccountSeedKind::Trust, Some(5.0)),
                AccountSeed::new("Basic", "3333", 1000.0, AccountSeedKind::Basic, None),
            ],
        }
    }
}

impl BankConfig {
    pub fn build_bank(&self) -> Bank {
        Bank::new(
            self.accounts
                .iter()
                .map(|seed| seed.to_account(self.checking_fee, self.trust))
                .collect(),
        )
    }
}

impl SchoolConfig {
    /// Registry preloaded with the seeds. Student `courses` become enrollments.
    pub fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::new();
        for instructor in &self.instructors {
            registry.add_instructor(instructor.clone())?;
        }
        for course in &self.courses {
            registry.add_course(course.clone())?;
        }
        for student in &self.students {
            registry.add_student(Student::new(student.id, &student.name, student.age))?;
            for course_id in &student.courses {
                registry.enroll_student_in_course(student.id, *course_id)?;
            }
        }
        Ok(registry)
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BANK_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        static PLACEHOLDER: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}"))
            .as_ref()
            .map_err(|e| AppError::ConfigError {
                message: format!("invalid placeholder pattern: {}", e),
            })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn validate_bank(&self) -> Result<()> {
        let bank = &self.bank;
        validate_non_negative("bank.checking_fee", bank.checking_fee)?;
        validate_range("bank.trust.max_withdrawals", bank.trust.max_withdrawals, 1, u32::MAX)?;
        validate_non_negative("bank.trust.bonus_threshold", bank.trust.bonus_threshold)?;
        validate_non_negative("bank.trust.bonus", bank.trust.bonus)?;
        if !(bank.trust.withdrawal_cap_ratio > 0.0 && bank.trust.withdrawal_cap_ratio <= 1.0) {
            return Err(AppError::InvalidConfigValueError {
                field: "bank.trust.withdrawal_cap_ratio".to_string(),
                value: bank.trust.withdrawal_cap_ratio.to_string(),
                reason: "Value must be greater than 0 and at most 1".to_string(),
            });
        }

        if bank.accounts.is_empty() {
            return Err(AppError::ConfigError {
                message: "bank.accounts must list at least one account".to_string(),
            });
        }
        for seed in &bank.accounts {
            validate_non_empty_string("bank.accounts.name", &seed.name)?;
            validate_non_negative("bank.accounts.balance", seed.balance)?;
            if let Some(rate) = seed.interest_rate {
                validate_range("bank.accounts.interest_rate", rate, 0.0, 100.0)?;
            }
        }
        validate_unique("bank.accounts.name", bank.accounts.iter().map(|s| &s.name))
    }

    fn validate_school(&self) -> Result<()> {
        let school = &self.school;
        validate_unique("school.instructors.id", school.instructors.iter().map(|i| &i.id))?;
        validate_unique("school.courses.id", school.courses.iter().map(|c| &c.id))?;
        validate_unique("school.students.id", school.students.iter().map(|s| &s.id))?;

        for instructor in &school.instructors {
            validate_non_empty_string("school.instructors.name", &instructor.name)?;
        }
        for course in &school.courses {
            validate_non_empty_string("school.courses.title", &course.title)?;
            if let Some(id) = course.instructor {
                if !school.instructors.iter().any(|i| i.id == id) {
                    return Err(AppError::InvalidConfigValueError {
                        field: "school.courses.instructor".to_string(),
                        value: id.to_string(),
                        reason: format!("Course {} names an unknown instructor", course.id),
                    });
                }
            }
        }
        for student in &school.students {
            validate_non_empty_string("school.students.name", &student.name)?;
            validate_unique("school.students.courses", &student.courses)?;
            for course_id in &student.courses {
                if !school.courses.iter().any(|c| c.id == *course_id) {
                    return Err(AppError::InvalidConfigValueError {
                        field: "school.students.courses".to_string(),
                        value: course_id.to_string(),
                        reason: format!("Student {} lists an unknown course", student.id),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_bank()?;
        self.validate_school()
    }
}
