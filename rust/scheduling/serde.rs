use crate::json::JSON;
use crate::scheduling::{Cal, Calendar, Convention, NamedCal, RuleCal, WeekMask};

impl JSON for Cal {}
impl JSON for RuleCal {}
impl JSON for NamedCal {}
impl JSON for Calendar {}
impl JSON for Convention {}
impl JSON for WeekMask {}
